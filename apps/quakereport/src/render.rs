//! Text and JSON output for a fetch outcome.

use crate::error::QuakeReportError;

use common::ErrorLocation;
use models::EarthquakeRecord;
use quake_core::FetchOutcome;

use std::fmt::Write;
use std::panic::Location;

use humantime::format_rfc3339_seconds;

pub const EMPTY_STATE_MESSAGE: &str = "No earthquakes found.";

/// One line per record, or the empty-state message.
pub fn render_text(outcome: &FetchOutcome) -> String {
    let mut out = String::new();

    if outcome.records.is_empty() {
        out.push_str(EMPTY_STATE_MESSAGE);
        out.push('\n');
        if let Some(failure) = outcome.failure {
            let _ = writeln!(out, "Reason: {failure}");
        }
        return out;
    }

    for record in &outcome.records {
        out.push_str(&render_record(record));
        out.push('\n');
    }

    if outcome.skipped > 0 {
        let _ = writeln!(out, "{} malformed feature(s) skipped.", outcome.skipped);
    }

    out
}

pub fn render_record(record: &EarthquakeRecord) -> String {
    format!(
        "{magnitude:>4.1}  {time}  {location}  {url}",
        magnitude = record.magnitude(),
        time = format_time(record),
        location = record.location(),
        url = record.detail_url(),
    )
}

// RFC 3339 covers 1970-01-01 up to the end of year 9999.
const MAX_RFC3339_MILLIS: i64 = 253_402_300_799_999;

fn format_time(record: &EarthquakeRecord) -> String {
    let millis = record.occurred_at_millis();
    if (0..=MAX_RFC3339_MILLIS).contains(&millis) {
        format_rfc3339_seconds(record.occurred_at()).to_string()
    } else {
        format!("{millis}ms")
    }
}

pub fn render_json(outcome: &FetchOutcome) -> Result<String, QuakeReportError> {
    serde_json::to_string_pretty(outcome).map_err(|e| QuakeReportError::QuakeReport {
        message: format!("Failed to serialize outcome: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
