use common::ErrorLocation;
use quake_core::error::config::ConfigError;
use quake_core::error::query::QueryError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that stop the command before a result can be printed.
///
/// A failed fetch is not one of these: it is a normal outcome with an empty
/// list. These cover setup problems around it.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum QuakeReportError {
    /// Error from this app (logger, runtime, output)
    #[error("Quake Report Error: {message} {location}")]
    QuakeReport {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded, validated or written
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Error from quake-core client setup
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for QuakeReportError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        QuakeReportError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryError> for QuakeReportError {
    #[track_caller]
    fn from(error: QueryError) -> Self {
        QuakeReportError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
