//! Where pipeline failures go before they are collapsed into a [`FailureKind`].
//!
//! [`FailureKind`]: crate::FailureKind

use crate::error::query::QueryError;

use log::error;

/// Receives every failure the fetch pipeline catches.
///
/// Implementations must not panic; they run on the fetch path.
pub trait FailureReporter: Send + Sync {
    fn report(&self, error: &QueryError);
}

/// Writes failures to the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl FailureReporter for LogReporter {
    fn report(&self, failure: &QueryError) {
        match failure {
            QueryError::InvalidUrl { .. } => error!("Problem building the query URL: {failure}"),
            QueryError::Transport { .. } => {
                error!("Problem retrieving the earthquake JSON results: {failure}")
            }
            QueryError::HttpStatus { code, .. } if code.is_server_error() => {
                error!("USGS service error response code {code}: {failure}")
            }
            QueryError::HttpStatus { code, .. } if code.is_client_error() => {
                error!("USGS rejected the query, response code {code}: {failure}")
            }
            QueryError::HttpStatus { code, .. } => {
                error!("Error response code {code}: {failure}")
            }
            QueryError::MalformedResponse { .. } => {
                error!("Problem parsing the earthquake JSON results: {failure}")
            }
        }
    }
}
