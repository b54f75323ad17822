//! GeoJSON feature collection → [`EarthquakeRecord`] list.

use crate::error::query::QueryError;

use common::ErrorLocation;
use models::{EarthquakeRecord, EarthquakeRecordBuilder};

use std::panic::Location;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do with a feature whose properties are incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// One bad feature fails the whole response.
    #[default]
    AllOrNothing,
    /// Bad features are logged and dropped; the rest are kept.
    SkipMalformed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeatures {
    pub records: Vec<EarthquakeRecord>,
    pub skipped: usize,
}

#[derive(Deserialize)]
struct Feature {
    properties: Properties,
}

// Null and absent both count as missing.
#[derive(Deserialize)]
struct Properties {
    #[serde(default)]
    mag: Option<f64>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    time: Option<i64>,
    #[serde(default)]
    url: Option<String>,
}

/// Parse a feed response body.
///
/// The body must be a JSON object with a `features` array. Records come back
/// in array order.
pub fn parse_features(body: &str, policy: ParsePolicy) -> Result<ParsedFeatures, QueryError> {
    let root: Value = serde_json::from_str(body)?;

    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| QueryError::MalformedResponse {
            message: String::from("Response has no `features` array"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut parsed = ParsedFeatures {
        records: Vec::with_capacity(features.len()),
        skipped: 0,
    };

    for (index, feature) in features.iter().enumerate() {
        match parse_feature(index, feature) {
            Ok(record) => parsed.records.push(record),
            Err(e) if policy == ParsePolicy::SkipMalformed => {
                warn!("Skipping feature: {e}");
                parsed.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Parsed {} of {} features ({} skipped)",
        parsed.records.len(),
        features.len(),
        parsed.skipped
    );

    Ok(parsed)
}

#[track_caller]
fn parse_feature(index: usize, value: &Value) -> Result<EarthquakeRecord, QueryError> {
    let location = ErrorLocation::from(Location::caller());

    let feature = Feature::deserialize(value).map_err(|e| QueryError::MalformedResponse {
        message: format!("features[{index}]: {e}"),
        location,
    })?;

    let properties = feature.properties;
    let mut builder = EarthquakeRecordBuilder::default();
    if let Some(mag) = properties.mag {
        builder = builder.with_magnitude(mag);
    }
    if let Some(place) = properties.place {
        builder = builder.with_location(place);
    }
    if let Some(time) = properties.time {
        builder = builder.with_occurred_at_millis(time);
    }
    if let Some(url) = properties.url {
        builder = builder.with_detail_url(url);
    }

    builder.build().map_err(|e| QueryError::MalformedResponse {
        message: format!("features[{index}]: {}", validation_message(e)),
        location,
    })
}

fn validation_message(error: models::ModelError) -> String {
    match error {
        models::ModelError::Validation { message, .. } => message,
    }
}
