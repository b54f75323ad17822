use quakereport::cli::{Cli, Commands};
use quakereport::commands;
use quakereport::error::QuakeReportError;
use quakereport::logger::{initialize as LoggerInitialize, level_for};
use quakereport::render::{render_json, render_text};

use common::ErrorLocation;
use quake_core::config::{AppConfig, default_config_dir};

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

/// Exit code when the fetch ran but reported a failure.
const EXIT_FETCH_FAILED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            if json {
                match serde_json::to_string(&e) {
                    Ok(rendered) => eprintln!("{rendered}"),
                    Err(_) => eprintln!("{e}"),
                }
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, QuakeReportError> {
    let config_dir = resolve_config_dir(cli.config_dir)?;

    create_dir_all(&config_dir).map_err(|e| QuakeReportError::QuakeReport {
        message: format!("Failed to create config directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Logger first so config loading is logged
    LoggerInitialize(&config_dir, level_for(cli.verbose))?;
    info!("Config directory: {}", config_dir.display());

    match cli.command {
        Commands::Fetch(args) => {
            let config = AppConfig::load(&config_dir)?;
            let config = commands::fetch::effective_config(config, &args)?;

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(|e| QuakeReportError::QuakeReport {
                    message: format!("Failed to start async runtime: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let outcome = runtime.block_on(commands::fetch::run(&config, &args))?;

            if cli.json {
                println!("{}", render_json(&outcome)?);
            } else {
                print!("{}", render_text(&outcome));
            }

            if outcome.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_FETCH_FAILED))
            }
        }
        Commands::Config { command } => {
            println!("{}", commands::config::run(&command, &config_dir)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf, QuakeReportError> {
    flag.or_else(default_config_dir)
        .ok_or_else(|| QuakeReportError::QuakeReport {
            message: String::from("No config directory available; pass --config-dir"),
            location: ErrorLocation::from(Location::caller()),
        })
}
