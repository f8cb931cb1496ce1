use energix_core::format_energy;

pub fn run(joules: f64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_energy(joules)?);
    Ok(())
}
