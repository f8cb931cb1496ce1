//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_energix"))
        .args(args)
        .env("ENERGIX_CONFIG_DIR", config_dir)
        .env_remove("ENERGIX_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(config_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(config_dir, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

#[test]
fn test_predict_default_footsteps() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["predict"]);
    assert!(stdout.contains("Footsteps:     1000"));
    assert!(stdout.contains("Total energy:  1.00 J"));
    assert!(stdout.contains("0.0003 Wh"));
}

#[test]
fn test_predict_strips_leading_zeros() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["predict", "0002000"]);
    assert!(stdout.contains("Footsteps:     2000"));
    assert!(stdout.contains("Total energy:  2.00 J"));
}

#[test]
fn test_predict_empty_input_is_zero() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["predict", ""]);
    assert!(stdout.contains("Total energy:  0.00 µJ"));
}

#[test]
fn test_predict_json() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["predict", "1000", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["footstep_count"], 1000);
    assert_eq!(json["formatted_energy"], "1.00 J");
    assert_eq!(json["watt_hours_display"], "0.0003 Wh");
    assert_eq!(json["constants"]["voltage_per_step"], 5.0);
}

#[test]
fn test_predict_with_overrides() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["predict", "10", "--voltage", "10", "--time", "1"]);
    // 10 V x 1 mA x 1 s = 10 mJ per step
    assert!(stdout.contains("Energy/Step:   10.00 mJ"));
    assert!(stdout.contains("Total energy:  100.00 mJ"));
}

#[test]
fn test_predict_rejects_negative_and_garbage() {
    let dir = TempDir::new().unwrap();
    for raw in ["-5", "12abc"] {
        let (_, stderr, code) = run_cli(dir.path(), &["predict", raw]);
        assert_eq!(code, 1);
        assert!(stderr.contains("error:"), "stderr: {stderr}");
    }
}

#[test]
fn test_predict_rejects_invalid_override() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["predict", "10", "--current=-1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("current_per_step"), "stderr: {stderr}");
}

#[test]
fn test_format_command() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_cli_success(dir.path(), &["format", "0.001"]).trim(), "1.00 mJ");
    assert_eq!(run_cli_success(dir.path(), &["format", "999.999"]).trim(), "1000.00 J");

    let (_, stderr, code) = run_cli(dir.path(), &["format", "-1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid input"), "stderr: {stderr}");
}

#[test]
fn test_constants_card() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["constants"]);
    assert!(stdout.contains("Voltage:      5V"));
    assert!(stdout.contains("Current:      1mA"));
    assert!(stdout.contains("Duration:     0.2s"));
    assert!(stdout.contains("Energy/Step:  1.00 mJ"));
}

#[test]
fn test_config_set_is_used_by_predict() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["config", "set", "step.voltage_per_step", "10"]);
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "step.voltage_per_step"]).trim(),
        "10.0"
    );

    let stdout = run_cli_success(dir.path(), &["predict", "1000"]);
    assert!(stdout.contains("Total energy:  2.00 J"));

    run_cli_success(dir.path(), &["config", "reset"]);
    let stdout = run_cli_success(dir.path(), &["predict", "1000"]);
    assert!(stdout.contains("Total energy:  1.00 J"));
}

#[test]
fn test_config_set_rejects_invalid_value() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "step.time_per_step", "-1"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "step.nope"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_path_uses_override_dir() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["config", "path"]);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(&*dir.path().to_string_lossy()));
}
