//! Per-step parameter card.

use serde_json::json;

use energix_core::{format_energy, Config};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let predictor = config.predictor()?;
    let constants = predictor.constants();
    let energy_per_step = format_energy(predictor.energy_per_step())?;

    if json {
        let card = json!({
            "voltage_per_step": constants.voltage_per_step,
            "current_per_step": constants.current_per_step,
            "time_per_step": constants.time_per_step,
            "energy_per_step_joules": predictor.energy_per_step(),
            "energy_per_step": energy_per_step,
        });
        println!("{}", serde_json::to_string_pretty(&card)?);
        return Ok(());
    }

    println!("Parameters per Step");
    println!("  Voltage:      {}V", constants.voltage_per_step);
    println!("  Current:      {}mA", constants.current_milliamps());
    println!("  Duration:     {}s", constants.time_per_step);
    println!("  Energy/Step:  {}", energy_per_step);
    Ok(())
}
