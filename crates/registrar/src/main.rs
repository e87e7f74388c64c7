mod config;
mod dtos;
mod report;
mod seed;

use config::{Config, OutputFormat};
use log::{error, info};
use registry::RegistrationSystem;
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Building catalog for {} ({} output)",
        config.current_year, config.format
    );

    let mut system = RegistrationSystem::with_current_year(config.current_year);
    seed::populate(&mut system);

    let mut stdout = io::stdout().lock();
    let result = match config.format {
        OutputFormat::Table => report::write_tables(&mut stdout, &system, &config.listings),
        OutputFormat::Json => report::write_json(&mut stdout, &system, &config.listings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
