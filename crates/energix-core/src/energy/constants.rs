//! Per-step electrical constants of a piezoelectric tile.

use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// Electrical output of a single footstep.
///
/// Each step is modelled as a constant voltage and current held for a fixed
/// duration, so the energy of one step is `voltage × current × time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepEnergyConstants {
    /// Volts produced per step
    #[serde(default = "default_voltage")]
    pub voltage_per_step: f64,
    /// Amperes produced per step
    #[serde(default = "default_current")]
    pub current_per_step: f64,
    /// Seconds the output is sustained per step
    #[serde(default = "default_time")]
    pub time_per_step: f64,
}

fn default_voltage() -> f64 {
    5.0
}
fn default_current() -> f64 {
    0.001
}
fn default_time() -> f64 {
    0.2
}

impl Default for StepEnergyConstants {
    fn default() -> Self {
        Self {
            voltage_per_step: default_voltage(),
            current_per_step: default_current(),
            time_per_step: default_time(),
        }
    }
}

impl StepEnergyConstants {
    /// Create a constants value. Validation happens when it is used.
    pub fn new(voltage_per_step: f64, current_per_step: f64, time_per_step: f64) -> Self {
        Self {
            voltage_per_step,
            current_per_step,
            time_per_step,
        }
    }

    /// Check that every constant is finite and non-negative.
    pub fn validate(&self) -> Result<(), PredictionError> {
        for (field, value) in [
            ("voltage_per_step", self.voltage_per_step),
            ("current_per_step", self.current_per_step),
            ("time_per_step", self.time_per_step),
        ] {
            if !is_valid_quantity(value) {
                return Err(PredictionError::InvalidConfiguration { field, value });
            }
        }
        Ok(())
    }

    /// Energy harvested by one step, in joules.
    pub fn energy_per_step(&self) -> Result<f64, PredictionError> {
        compute_energy_per_step(self)
    }

    /// Current per step in milliamperes, as shown on the parameter card.
    pub fn current_milliamps(&self) -> f64 {
        self.current_per_step * 1000.0
    }
}

/// Compute `voltage × current × time` in joules.
///
/// # Errors
///
/// Returns [`PredictionError::InvalidConfiguration`] if any constant is
/// negative, NaN or infinite, or if the product overflows.
pub fn compute_energy_per_step(constants: &StepEnergyConstants) -> Result<f64, PredictionError> {
    constants.validate()?;

    let energy = constants.voltage_per_step * constants.current_per_step * constants.time_per_step;
    if !energy.is_finite() {
        return Err(PredictionError::InvalidConfiguration {
            field: "energy_per_step",
            value: energy,
        });
    }
    Ok(energy)
}

pub(crate) fn is_valid_quantity(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
