//! # EnergiX Core Library
//!
//! This library predicts the electrical energy a piezoelectric floor tile
//! harvests from footsteps. The dashboard and the CLI are thin layers over
//! the same pure functions.
//!
//! ## Architecture
//!
//! - **Energy**: per-step constants, the prediction itself and the
//!   magnitude-scaled unit formatting (µJ/mJ/J/kJ)
//! - **Config**: TOML file holding the tile's electrical constants
//!
//! ## Key Components
//!
//! - [`StepEnergyConstants`]: voltage, current and duration of one step
//! - [`predict`]: footstep count to [`PredictionResult`]
//! - [`format_energy`]: joules to a readable string
//! - [`Config`]: application configuration management

pub mod config;
pub mod energy;
pub mod error;

pub use config::{config_dir, Config};
pub use energy::{
    compute_energy_per_step, format_energy, predict, EnergyPredictor, EnergyUnit,
    PredictionRequest, PredictionResult, StepEnergyConstants,
};
pub use error::{ConfigError, CoreError, PredictionError, Result};
