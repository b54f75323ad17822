//! Logging for the quakereport CLI.
//!
//! Dual output: colored stderr (stdout carries the earthquake list) and a
//! plain log file. Initialization runs once per process.

use crate::error::QuakeReportError;

use common::ErrorLocation;

use std::fs::File;
use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Serializes initialization attempts.
static INIT_LOGGER_LOCK: Mutex<()> = Mutex::new(());

/// Set only once a logger has actually been installed.
static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "quakereport.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Level to use for the given `--verbose` flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Initialize the logger with dual output (stderr + file).
///
/// Safe to call more than once: once a logger is installed, later calls log
/// a warning and return Ok. A failed attempt installs nothing, so the next
/// call tries again.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the global logger
/// cannot be installed.
pub fn initialize(log_dir: &Path, level: LevelFilter) -> Result<(), QuakeReportError> {
    let _guard = INIT_LOGGER_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if LOGGER_INITIALIZED.load(Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    initialize_internal(log_dir, level)?;
    LOGGER_INITIALIZED.store(true, Ordering::SeqCst);

    info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
    Ok(())
}

/// Open (append) the log file inside `log_dir`.
#[track_caller]
pub(crate) fn open_log_file(log_dir: &Path) -> Result<File, QuakeReportError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    fern::log_file(&log_file_path).map_err(|e| QuakeReportError::QuakeReport {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn initialize_internal(log_dir: &Path, level: LevelFilter) -> Result<(), QuakeReportError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let base_dispatch = Dispatch::new()
        .level(level)
        // reqwest/hyper internals are noise at trace level
        .level_for("hyper_util", LevelFilter::Info)
        .level_for("rustls", LevelFilter::Info);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(open_log_file(log_dir)?);

    base_dispatch
        .chain(stderr_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| QuakeReportError::QuakeReport {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
