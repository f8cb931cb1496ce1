//! Energy prediction command.

use clap::Args;
use serde::Serialize;

use energix_core::{format_energy, Config, EnergyPredictor, PredictionResult, StepEnergyConstants};

use crate::input::normalize_footsteps;

#[derive(Args)]
pub struct PredictArgs {
    /// Number of footsteps (defaults to the configured default_footsteps)
    #[arg(allow_hyphen_values = true)]
    footsteps: Option<String>,
    /// Override voltage per step (V)
    #[arg(long)]
    voltage: Option<f64>,
    /// Override current per step (A)
    #[arg(long)]
    current: Option<f64>,
    /// Override duration per step (s)
    #[arg(long)]
    time: Option<f64>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PredictOutput<'a> {
    constants: &'a StepEnergyConstants,
    #[serde(flatten)]
    result: &'a PredictionResult,
    watt_hours_display: String,
}

pub fn run(args: PredictArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let footsteps = match args.footsteps.as_deref() {
        Some(raw) => normalize_footsteps(raw)?,
        None => i64::try_from(config.default_footsteps)?,
    };

    let mut constants = config.step;
    if let Some(v) = args.voltage {
        constants.voltage_per_step = v;
    }
    if let Some(a) = args.current {
        constants.current_per_step = a;
    }
    if let Some(s) = args.time {
        constants.time_per_step = s;
    }

    let predictor = EnergyPredictor::new(constants)?;
    let result = predictor.predict(footsteps)?;
    tracing::debug!(
        footsteps,
        joules = result.total_energy_joules,
        "prediction complete"
    );

    if args.json {
        let output = PredictOutput {
            constants: predictor.constants(),
            result: &result,
            watt_hours_display: result.watt_hours_display(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Footsteps:     {}", result.footstep_count);
    println!("Energy/Step:   {}", format_energy(result.energy_per_step_joules)?);
    println!("Total energy:  {}", result.formatted_energy);
    println!("               {}", result.watt_hours_display());
    Ok(())
}
