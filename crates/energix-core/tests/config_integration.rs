//! Integration tests for TOML configuration persistence.

use energix_core::{Config, ConfigError, StepEnergyConstants};
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.set("step.voltage_per_step", "3.3").unwrap();
    cfg.set("default_footsteps", "42").unwrap();
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.step, StepEnergyConstants::new(3.3, 0.001, 0.2));
    assert_eq!(loaded.default_footsteps, 42);
}

#[test]
fn test_invalid_constants_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[step]\ncurrent_per_step = -0.5\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "step.current_per_step"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[step\nvoltage_per_step = ").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseFailed(_))
    ));
}
