use clap::{Parser, Subcommand};

mod commands;
mod input;
mod logging;

#[derive(Parser)]
#[command(name = "energix", version, about = "EnergiX footstep energy predictor")]
struct Cli {
    /// Enable debug logging (overridden by ENERGIX_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict harvested energy for a number of footsteps
    Predict(commands::predict::PredictArgs),
    /// Render a joule value in a readable unit
    Format {
        /// Energy in joules
        #[arg(allow_negative_numbers = true)]
        joules: f64,
    },
    /// Show the per-step electrical parameters
    Constants {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Predict(args) => commands::predict::run(args),
        Commands::Format { joules } => commands::format::run(joules),
        Commands::Constants { json } => commands::constants::run(json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
