//! Query URL construction and validation.

use crate::error::query::QueryError;

use common::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};
use url::Url;

const FORMAT_GEOJSON: &str = "geojson";
const EVENT_TYPE_EARTHQUAKE: &str = "earthquake";

pub const DEFAULT_MIN_MAGNITUDE: f64 = 6.0;
pub const DEFAULT_LIMIT: u32 = 10;

/// Sort order accepted by the feed's `orderby` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Newest first.
    #[default]
    Time,
    /// Largest first.
    Magnitude,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Time => "time",
            OrderBy::Magnitude => "magnitude",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameters {
    pub min_magnitude: f64,
    pub order_by: OrderBy,
    pub limit: u32,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            order_by: OrderBy::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Parse a query string into a URL the fetcher can use.
///
/// Only `http` and `https` are accepted; anything the `url` crate rejects,
/// or any other scheme, is [`QueryError::InvalidUrl`].
#[track_caller]
pub fn parse_query_url(query_url: &str) -> Result<Url, QueryError> {
    let url = Url::parse(query_url)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(QueryError::InvalidUrl {
            message: format!("Unsupported URL scheme: {other}"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Compose a GeoJSON earthquake query against `endpoint`.
///
/// Query pairs already present on `endpoint` are kept.
#[track_caller]
pub fn build_query_url(endpoint: &str, parameters: &QueryParameters) -> Result<Url, QueryError> {
    let mut url = parse_query_url(endpoint)?;

    url.query_pairs_mut()
        .append_pair("format", FORMAT_GEOJSON)
        .append_pair("eventtype", EVENT_TYPE_EARTHQUAKE)
        .append_pair("orderby", parameters.order_by.as_str())
        .append_pair("minmag", &parameters.min_magnitude.to_string())
        .append_pair("limit", &parameters.limit.to_string());

    Ok(url)
}
