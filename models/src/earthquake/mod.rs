pub mod builder;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One earthquake event as reported by the USGS feed.
///
/// Fields are private and only exposed through accessors, so a record never
/// changes after it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    magnitude: f64,
    location: String,
    occurred_at_millis: i64,
    detail_url: String,
}

impl EarthquakeRecord {
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        occurred_at_millis: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            occurred_at_millis,
            detail_url: detail_url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Free-text place description, e.g. "10km NE of Somewhere".
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Event time in milliseconds since 1970-01-01T00:00:00Z.
    pub fn occurred_at_millis(&self) -> i64 {
        self.occurred_at_millis
    }

    /// USGS event page with the full details.
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }

    /// Event time as a `SystemTime`.
    ///
    /// Negative millisecond values are placed before the epoch. Values the
    /// platform cannot represent clamp to the epoch.
    pub fn occurred_at(&self) -> SystemTime {
        let offset = Duration::from_millis(self.occurred_at_millis.unsigned_abs());
        if self.occurred_at_millis >= 0 {
            UNIX_EPOCH.checked_add(offset).unwrap_or(UNIX_EPOCH)
        } else {
            UNIX_EPOCH.checked_sub(offset).unwrap_or(UNIX_EPOCH)
        }
    }
}
