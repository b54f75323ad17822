use crate::{EarthquakeRecord, EarthquakeRecordBuilder, ModelError};

fn complete_builder() -> EarthquakeRecordBuilder {
    EarthquakeRecordBuilder::default()
        .with_magnitude(6.2)
        .with_location("10km NE of Somewhere")
        .with_occurred_at_millis(1_500_000_000_000)
        .with_detail_url("https://earthquake.usgs.gov/detail")
}

fn validation_message(result: Result<EarthquakeRecord, ModelError>) -> String {
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => message,
    }
}

/// **VALUE**: Verifies a fully populated builder yields the expected record.
///
/// **WHY THIS MATTERS**: The parser builds every record through this path.
///
/// **BUG THIS CATCHES**: Would catch fields being swapped between builder and record.
#[test]
fn given_all_fields_when_building_then_returns_record() {
    // GIVEN: All four fields set
    // WHEN: Building
    let record = complete_builder().build().unwrap();

    // THEN: Same as direct construction
    assert_eq!(
        record,
        EarthquakeRecord::new(
            6.2,
            "10km NE of Somewhere",
            1_500_000_000_000,
            "https://earthquake.usgs.gov/detail"
        )
    );
}

/// **VALUE**: Verifies that each missing field is rejected by name.
///
/// **WHY THIS MATTERS**: A feature lacking any property must never produce a
/// partially-filled record. The message tells the log reader which property was absent.
///
/// **BUG THIS CATCHES**: Would catch a required-field check being dropped or defaulted
/// (e.g. magnitude silently becoming 0.0).
#[test]
fn given_missing_magnitude_when_building_then_returns_validation_error() {
    let builder = EarthquakeRecordBuilder::default()
        .with_location("Somewhere")
        .with_occurred_at_millis(1)
        .with_detail_url("https://example.org");

    assert_eq!(validation_message(builder.build()), "Magnitude is required");
}

#[test]
fn given_missing_location_when_building_then_returns_validation_error() {
    let builder = EarthquakeRecordBuilder::default()
        .with_magnitude(1.0)
        .with_occurred_at_millis(1)
        .with_detail_url("https://example.org");

    assert_eq!(validation_message(builder.build()), "Location is required");
}

#[test]
fn given_missing_time_when_building_then_returns_validation_error() {
    let builder = EarthquakeRecordBuilder::default()
        .with_magnitude(1.0)
        .with_location("Somewhere")
        .with_detail_url("https://example.org");

    assert_eq!(validation_message(builder.build()), "Time is required");
}

#[test]
fn given_missing_url_when_building_then_returns_validation_error() {
    let builder = EarthquakeRecordBuilder::default()
        .with_magnitude(1.0)
        .with_location("Somewhere")
        .with_occurred_at_millis(1);

    assert_eq!(validation_message(builder.build()), "Detail URL is required");
}

#[test]
fn given_nan_magnitude_when_building_then_returns_validation_error() {
    let result = complete_builder().with_magnitude(f64::NAN).build();

    assert!(validation_message(result).starts_with("Magnitude must be finite"));
}

/// **VALUE**: Verifies validation errors carry the caller's location.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being removed from `build`, which
/// would make every error point into builder.rs.
#[test]
fn given_invalid_builder_when_building_then_error_names_calling_file() {
    let err = EarthquakeRecordBuilder::default().build().unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("Validation Error: Magnitude is required"));
    assert!(rendered.contains("tests/earthquake/builder.rs"));
}
