use crate::cli::ConfigCommands;
use crate::error::QuakeReportError;

use common::ErrorLocation;
use quake_core::config::{AppConfig, config_path};

use std::panic::Location;
use std::path::Path;

/// Run a `config` subcommand and return the text to print.
///
/// `init` does not read the existing file, so `--force` can replace a
/// corrupt one.
pub fn run(command: &ConfigCommands, config_dir: &Path) -> Result<String, QuakeReportError> {
    match command {
        ConfigCommands::Show => show(config_dir),
        ConfigCommands::Init { force } => init(config_dir, *force),
    }
}

fn show(config_dir: &Path) -> Result<String, QuakeReportError> {
    let config = AppConfig::load(config_dir)?;

    serde_json::to_string_pretty(&config).map_err(|e| QuakeReportError::QuakeReport {
        message: format!("Failed to serialize config: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn init(config_dir: &Path, force: bool) -> Result<String, QuakeReportError> {
    let path = config_path(config_dir);
    if path.exists() && !force {
        return Err(QuakeReportError::Config {
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let written = AppConfig::default().save(config_dir)?;
    Ok(format!("Wrote {}", written.display()))
}
