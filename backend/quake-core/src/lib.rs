pub mod config;
pub mod error;
pub mod report;
pub mod usgs;

#[cfg(test)]
mod tests;

pub use error::query::{FailureKind, QueryError};
pub use report::{FailureReporter, LogReporter};
pub use usgs::{FetchOutcome, UsgsClient, fetch};

pub const USGS_BASE_URL: &str = "https://earthquake.usgs.gov";
pub const USGS_QUERY_PATH: &str = "/fdsnws/event/1/query";
pub const USGS_QUERY_ENDPOINT: &str = const_format::concatcp!(USGS_BASE_URL, USGS_QUERY_PATH);
