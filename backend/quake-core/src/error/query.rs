use common::{ErrorLocation, HttpStatusCode};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;

use serde::Serialize;
use thiserror::Error as ThisError;

/// Failure raised by one stage of the fetch pipeline.
///
/// Never crosses the public `fetch` boundary: it is reported and then
/// collapsed into a [`FailureKind`].
#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("Invalid URL Error: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Status Error: {code} {location}")]
    HttpStatus {
        code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl QueryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            QueryError::InvalidUrl { .. } => FailureKind::InvalidUrl,
            QueryError::Transport { .. } => FailureKind::TransportError,
            QueryError::HttpStatus { code, .. } => FailureKind::HttpStatusError {
                code: code.as_u16(),
            },
            QueryError::MalformedResponse { .. } => FailureKind::MalformedResponse,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            QueryError::InvalidUrl { location, .. }
            | QueryError::Transport { location, .. }
            | QueryError::HttpStatus { location, .. }
            | QueryError::MalformedResponse { location, .. } => *location,
        }
    }
}

/// What went wrong, without the details. This is what callers of `fetch` see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    InvalidUrl,
    TransportError,
    HttpStatusError { code: u16 },
    MalformedResponse,
}

impl Display for FailureKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            FailureKind::InvalidUrl => write!(formatter, "invalid query URL"),
            FailureKind::TransportError => write!(formatter, "network error"),
            FailureKind::HttpStatusError { code } => write!(formatter, "HTTP status {code}"),
            FailureKind::MalformedResponse => write!(formatter, "malformed response"),
        }
    }
}

impl From<url::ParseError> for QueryError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        QueryError::InvalidUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for QueryError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        QueryError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for QueryError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        QueryError::MalformedResponse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
