use crate::EarthquakeRecord;
use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::panic::Location;

/// Builder for creating validated EarthquakeRecord instances.
///
/// Every field is required. `build` refuses to produce a record while any of
/// them is missing, so a half-filled record cannot leave the parser.
#[derive(Debug, Default)]
pub struct EarthquakeRecordBuilder {
    magnitude: Option<f64>,
    location: Option<String>,
    occurred_at_millis: Option<i64>,
    detail_url: Option<String>,
}

impl EarthquakeRecordBuilder {
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_occurred_at_millis(mut self, millis: i64) -> Self {
        self.occurred_at_millis = Some(millis);
        self
    }

    pub fn with_detail_url(mut self, url: impl Into<String>) -> Self {
        self.detail_url = Some(url.into());
        self
    }

    /// Build the EarthquakeRecord with validation.
    #[track_caller]
    pub fn build(self) -> Result<EarthquakeRecord, ModelError> {
        let magnitude = self.magnitude.ok_or_else(|| ModelError::Validation {
            message: String::from("Magnitude is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !magnitude.is_finite() {
            return Err(ModelError::Validation {
                message: format!("Magnitude must be finite, got {magnitude}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let location = self.location.ok_or_else(|| ModelError::Validation {
            message: String::from("Location is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let occurred_at_millis = self.occurred_at_millis.ok_or_else(|| ModelError::Validation {
            message: String::from("Time is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let detail_url = self.detail_url.ok_or_else(|| ModelError::Validation {
            message: String::from("Detail URL is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(EarthquakeRecord {
            magnitude,
            location,
            occurred_at_millis,
            detail_url,
        })
    }
}
