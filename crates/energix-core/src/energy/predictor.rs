//! Footstep count to harvested energy.

use serde::{Deserialize, Serialize};

use super::constants::{compute_energy_per_step, StepEnergyConstants};
use super::format::{format_energy, to_fixed, EnergyUnit};
use crate::error::PredictionError;

/// Joules in one watt-hour.
pub const JOULES_PER_WATT_HOUR: f64 = 3600.0;

/// Decimal places used when displaying watt-hours.
pub const WATT_HOUR_DECIMALS: usize = 4;

/// A validated footstep count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Number of footsteps on the tile
    pub footstep_count: u64,
}

impl PredictionRequest {
    /// Build a request, rejecting negative counts instead of clamping them.
    pub fn new(footstep_count: i64) -> Result<Self, PredictionError> {
        let footstep_count =
            u64::try_from(footstep_count).map_err(|_| PredictionError::InvalidInput {
                field: "footstep_count",
                value: footstep_count as f64,
            })?;
        Ok(Self { footstep_count })
    }
}

impl From<u64> for PredictionRequest {
    fn from(footstep_count: u64) -> Self {
        Self { footstep_count }
    }
}

/// Energy predicted for a number of footsteps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Footsteps the prediction was made for
    pub footstep_count: u64,
    /// Energy of a single step (J)
    pub energy_per_step_joules: f64,
    /// Total energy (J)
    pub total_energy_joules: f64,
    /// Total energy (Wh)
    pub total_energy_watt_hours: f64,
    /// Total energy scaled to a readable unit, e.g. `"1.00 J"`
    pub formatted_energy: String,
}

impl PredictionResult {
    /// Watt-hours with four decimals, e.g. `"0.0003 Wh"`.
    pub fn watt_hours_display(&self) -> String {
        format!(
            "{} Wh",
            to_fixed(self.total_energy_watt_hours, WATT_HOUR_DECIMALS)
        )
    }

    /// Unit chosen for `formatted_energy`.
    pub fn unit(&self) -> EnergyUnit {
        EnergyUnit::for_joules(self.total_energy_joules)
    }
}

/// Predictor bound to one set of validated step constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyPredictor {
    constants: StepEnergyConstants,
    energy_per_step: f64,
}

impl Default for EnergyPredictor {
    fn default() -> Self {
        let constants = StepEnergyConstants::default();
        Self {
            energy_per_step: constants.voltage_per_step
                * constants.current_per_step
                * constants.time_per_step,
            constants,
        }
    }
}

impl EnergyPredictor {
    /// Validate the constants and precompute the energy of one step.
    pub fn new(constants: StepEnergyConstants) -> Result<Self, PredictionError> {
        let energy_per_step = compute_energy_per_step(&constants)?;
        Ok(Self {
            constants,
            energy_per_step,
        })
    }

    /// Constants this predictor was built with.
    pub fn constants(&self) -> &StepEnergyConstants {
        &self.constants
    }

    /// Energy of a single step (J).
    pub fn energy_per_step(&self) -> f64 {
        self.energy_per_step
    }

    /// Predict the energy harvested by `footstep_count` steps.
    pub fn predict(&self, footstep_count: i64) -> Result<PredictionResult, PredictionError> {
        self.predict_request(PredictionRequest::new(footstep_count)?)
    }

    /// Predict from an already validated request.
    pub fn predict_request(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let total_energy_joules = request.footstep_count as f64 * self.energy_per_step;
        if !total_energy_joules.is_finite() {
            return Err(PredictionError::InvalidInput {
                field: "total_energy_joules",
                value: total_energy_joules,
            });
        }

        let result = PredictionResult {
            footstep_count: request.footstep_count,
            energy_per_step_joules: self.energy_per_step,
            total_energy_joules,
            total_energy_watt_hours: total_energy_joules / JOULES_PER_WATT_HOUR,
            formatted_energy: format_energy(total_energy_joules)?,
        };

        tracing::trace!(
            footsteps = result.footstep_count,
            joules = result.total_energy_joules,
            "energy predicted"
        );
        Ok(result)
    }
}

/// Predict the energy harvested by `footstep_count` steps.
///
/// # Errors
///
/// Returns [`PredictionError::InvalidInput`] for a negative count and
/// [`PredictionError::InvalidConfiguration`] for invalid constants.
pub fn predict(
    footstep_count: i64,
    constants: &StepEnergyConstants,
) -> Result<PredictionResult, PredictionError> {
    let request = PredictionRequest::new(footstep_count)?;
    EnergyPredictor::new(*constants)?.predict_request(request)
}
