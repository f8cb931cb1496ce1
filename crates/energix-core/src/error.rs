//! Core error types for energix-core.
//!
//! Prediction failures are precondition violations on the caller's side;
//! configuration failures come from reading or writing the TOML file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for energix-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Prediction-related errors
    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the energy calculation and formatting functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// A per-step electrical constant is negative, NaN or infinite
    #[error("Invalid configuration: '{field}' must be a finite non-negative number, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    /// A footstep count or energy value is negative, NaN or infinite
    #[error("Invalid input: '{field}' must be a finite non-negative number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

impl PredictionError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            PredictionError::InvalidConfiguration { field, .. } => field,
            PredictionError::InvalidInput { field, .. } => field,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No home directory to place the configuration in
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
