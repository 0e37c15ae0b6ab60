use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod config;
mod parsing;
mod utils;

use catalog::registry::PresetRegistry;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("weather_presets=debug,info")
    } else {
        EnvFilter::new("weather_presets=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let registry = PresetRegistry::for_server(&cli.layout());

    match cli.command {
        cli::Commands::List => {
            cli::presets::run_list(&registry, cli.format, cli.verbose)?;
        }
        cli::Commands::Show { ref key } => {
            cli::presets::run_show(&registry, key, cli.format)?;
        }
        cli::Commands::Delete { ref key } => {
            if !cli::presets::run_delete(&registry, key, cli.format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
