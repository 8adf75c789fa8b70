// file: src/main.rs
// version: 1.0.0
// guid: 5a3c8e07-b9d1-4f26-a7e4-0f6b2d9c3e81

//! Hydra Agent - Main entry point

use clap::Parser;
use hydra_agent::{
    cli::{args::Commands, commands::*, Cli},
    config::ConfigLoader,
    logging::logger,
    Result,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.json_logs {
        logger::init_json_logger()?;
    } else {
        logger::init_logger(cli.verbose, cli.quiet)?;
    }

    let config = ConfigLoader::new().load(cli.config.as_deref())?;

    match cli.command {
        Commands::Cluster(command) => cluster_command(&config, command),
        Commands::License(command) => license_command(&config, command),
        Commands::CheckPrereqs => check_prerequisites_command(&config),
    }
}
