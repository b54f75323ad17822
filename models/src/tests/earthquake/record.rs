use crate::EarthquakeRecord;

use std::time::{Duration, UNIX_EPOCH};

/// **VALUE**: Verifies accessors return constructor arguments untouched.
///
/// **WHY THIS MATTERS**: The display layer shows these values verbatim. Any rounding of
/// the magnitude or trimming of the place text would show users different data than USGS
/// published.
///
/// **BUG THIS CATCHES**: Would catch an accessor returning the wrong field or a
/// constructor that normalizes its input.
#[test]
fn given_field_values_when_record_constructed_then_accessors_return_them_verbatim() {
    // GIVEN: Raw field values
    let record = EarthquakeRecord::new(
        6.2,
        "10km NE of Somewhere",
        1_500_000_000_000,
        "https://earthquake.usgs.gov/earthquakes/eventpage/us1000abcd",
    );

    // THEN: Each accessor hands back exactly what went in
    assert_eq!(record.magnitude(), 6.2);
    assert_eq!(record.location(), "10km NE of Somewhere");
    assert_eq!(record.occurred_at_millis(), 1_500_000_000_000);
    assert_eq!(
        record.detail_url(),
        "https://earthquake.usgs.gov/earthquakes/eventpage/us1000abcd"
    );
}

#[test]
fn given_identical_fields_when_compared_then_records_are_equal() {
    let a = EarthquakeRecord::new(4.5, "Here", 1, "https://example.org/a");
    let b = EarthquakeRecord::new(4.5, "Here", 1, "https://example.org/a");
    let c = EarthquakeRecord::new(4.6, "Here", 1, "https://example.org/a");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// **VALUE**: Verifies epoch-millisecond conversion, including pre-1970 events.
///
/// **WHY THIS MATTERS**: Historic catalogue queries return negative timestamps; those must
/// not wrap around to far-future dates.
///
/// **BUG THIS CATCHES**: Would catch a cast of a negative `i64` to `u64`.
#[test]
fn given_epoch_millis_when_converted_then_system_time_matches() {
    let after = EarthquakeRecord::new(5.0, "After", 1_500_000_000_123, "u");
    let before = EarthquakeRecord::new(5.0, "Before", -86_400_000, "u");

    assert_eq!(
        after.occurred_at(),
        UNIX_EPOCH + Duration::from_millis(1_500_000_000_123)
    );
    assert_eq!(
        before.occurred_at(),
        UNIX_EPOCH - Duration::from_secs(86_400)
    );
}

/// **VALUE**: Verifies the JSON shape the CLI prints with `--json`.
///
/// **WHY THIS MATTERS**: Scripts consume this output; renaming a field breaks them.
///
/// **BUG THIS CATCHES**: Would catch an accidental serde rename or a dropped derive.
#[test]
fn given_record_when_serialized_then_uses_snake_case_field_names() {
    let record = EarthquakeRecord::new(7.1, "Offshore", 42, "https://example.org/e");

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["magnitude"], 7.1);
    assert_eq!(json["location"], "Offshore");
    assert_eq!(json["occurred_at_millis"], 42);
    assert_eq!(json["detail_url"], "https://example.org/e");
}
