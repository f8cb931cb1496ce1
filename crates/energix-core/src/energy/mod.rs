//! Footstep energy prediction.
//!
//! A step is modelled as a constant voltage and current held for a fixed
//! time. Everything here is a pure function of its arguments.

mod constants;
mod format;
mod predictor;

pub use constants::{compute_energy_per_step, StepEnergyConstants};
pub use format::{format_energy, EnergyUnit, ENERGY_DECIMALS};
pub use predictor::{
    predict, EnergyPredictor, PredictionRequest, PredictionResult, JOULES_PER_WATT_HOUR,
    WATT_HOUR_DECIMALS,
};
