// Unit tests for the feature-collection parser
// Covers the response shapes the feed can send and both parse policies

use crate::FailureKind;
use crate::usgs::{ParsePolicy, parse_features};

use models::EarthquakeRecord;

use serde_json::json;

fn feature(mag: f64, place: &str, time: i64, url: &str) -> serde_json::Value {
    json!({
        "type": "Feature",
        "properties": { "mag": mag, "place": place, "time": time, "url": url },
        "geometry": { "type": "Point", "coordinates": [0.0, 0.0, 10.0] },
        "id": "us1000test"
    })
}

fn collection(features: Vec<serde_json::Value>) -> String {
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

/// **VALUE**: Verifies a single well-formed feature maps to one record, field for field.
///
/// **WHY THIS MATTERS**: This is the happy path every list render depends on.
///
/// **BUG THIS CATCHES**: Would catch `place`/`url` being swapped or `time` being truncated.
#[test]
fn given_single_feature_when_parsed_then_returns_matching_record() {
    // GIVEN: One feature with all properties
    let body = collection(vec![feature(
        6.2,
        "10km NE of Somewhere",
        1_500_000_000_000,
        "https://earthquake.usgs.gov/detail",
    )]);

    // WHEN: Parsing
    let parsed = parse_features(&body, ParsePolicy::AllOrNothing).unwrap();

    // THEN: Exactly one record, verbatim
    assert_eq!(
        parsed.records,
        vec![EarthquakeRecord::new(
            6.2,
            "10km NE of Somewhere",
            1_500_000_000_000,
            "https://earthquake.usgs.gov/detail"
        )]
    );
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn given_several_features_when_parsed_then_array_order_is_kept() {
    let body = collection(vec![
        feature(5.0, "First", 3, "u1"),
        feature(7.0, "Second", 1, "u2"),
        feature(6.0, "Third", 2, "u3"),
    ]);

    let parsed = parse_features(&body, ParsePolicy::AllOrNothing).unwrap();

    let places: Vec<&str> = parsed.records.iter().map(|r| r.location()).collect();
    assert_eq!(places, ["First", "Second", "Third"]);
}

#[test]
fn given_empty_features_array_when_parsed_then_returns_no_records() {
    let parsed = parse_features(&collection(vec![]), ParsePolicy::AllOrNothing).unwrap();

    assert!(parsed.records.is_empty());
}

/// **VALUE**: Verifies non-JSON bodies are reported as malformed, not panicked on.
///
/// **WHY THIS MATTERS**: Proxies and captive portals return HTML with status 200.
///
/// **BUG THIS CATCHES**: Would catch an `unwrap()` on `serde_json::from_str`.
#[test]
fn given_non_json_body_when_parsed_then_returns_malformed_response() {
    let err = parse_features("<html>Service Unavailable</html>", ParsePolicy::AllOrNothing)
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[test]
fn given_empty_body_when_parsed_then_returns_malformed_response() {
    let err = parse_features("", ParsePolicy::AllOrNothing).unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

/// **VALUE**: Verifies the `features` key must exist and be an array.
///
/// **BUG THIS CATCHES**: Would catch treating a missing array as "no earthquakes", which
/// hides a broken response behind an empty-state message with no failure reported.
#[test]
fn given_missing_or_non_array_features_when_parsed_then_returns_malformed_response() {
    let bodies = [
        json!({ "type": "FeatureCollection" }).to_string(),
        json!({ "features": {} }).to_string(),
        json!({ "features": null }).to_string(),
        json!([feature(1.0, "p", 1, "u")]).to_string(),
    ];

    for body in bodies {
        let err = parse_features(&body, ParsePolicy::AllOrNothing).unwrap_err();
        assert_eq!(err.kind(), FailureKind::MalformedResponse, "body: {body}");
        assert!(err.to_string().contains("features"));
    }
}

/// **VALUE**: Verifies the all-or-nothing policy discards good features when one is bad.
///
/// **WHY THIS MATTERS**: This is the default behavior callers rely on: either the whole
/// list is trustworthy or the failure is surfaced.
///
/// **BUG THIS CATCHES**: Would catch the default silently switching to skip mode.
#[test]
fn given_feature_missing_mag_when_parsed_all_or_nothing_then_whole_response_fails() {
    // GIVEN: A good feature followed by one without `mag`
    let body = json!({
        "features": [
            feature(6.0, "Good", 1, "u1"),
            { "properties": { "place": "Bad", "time": 2, "url": "u2" } }
        ]
    })
    .to_string();

    // WHEN: Parsing with the default policy
    let err = parse_features(&body, ParsePolicy::default()).unwrap_err();

    // THEN: Malformed, naming the offending element and property
    assert_eq!(err.kind(), FailureKind::MalformedResponse);
    let rendered = err.to_string();
    assert!(rendered.contains("features[1]"), "got: {rendered}");
    assert!(rendered.contains("Magnitude is required"), "got: {rendered}");
}

#[test]
fn given_each_required_property_missing_when_parsed_then_fails() {
    for missing in ["mag", "place", "time", "url"] {
        let mut properties = json!({ "mag": 5.5, "place": "P", "time": 9, "url": "U" });
        properties.as_object_mut().unwrap().remove(missing);
        let body = json!({ "features": [{ "properties": properties }] }).to_string();

        let result = parse_features(&body, ParsePolicy::AllOrNothing);

        assert!(result.is_err(), "missing `{missing}` should fail");
    }
}

/// **VALUE**: Verifies a `null` magnitude counts as missing.
///
/// **WHY THIS MATTERS**: The live feed sends `"mag": null` for events still under review.
#[test]
fn given_null_mag_when_parsed_then_fails() {
    let body = json!({
        "features": [{ "properties": { "mag": null, "place": "P", "time": 1, "url": "U" } }]
    })
    .to_string();

    assert!(parse_features(&body, ParsePolicy::AllOrNothing).is_err());
}

#[test]
fn given_wrongly_typed_property_when_parsed_then_fails() {
    let body = json!({
        "features": [{ "properties": { "mag": "big", "place": "P", "time": 1, "url": "U" } }]
    })
    .to_string();

    let err = parse_features(&body, ParsePolicy::AllOrNothing).unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[test]
fn given_feature_without_properties_when_parsed_then_fails() {
    let body = json!({ "features": [{ "type": "Feature" }] }).to_string();

    assert!(parse_features(&body, ParsePolicy::AllOrNothing).is_err());
}

/// **VALUE**: Verifies skip mode keeps good features in order and counts the bad ones.
///
/// **WHY THIS MATTERS**: One unreviewed event should not blank the whole list for users
/// who opted into skipping.
///
/// **BUG THIS CATCHES**: Would catch skip mode aborting, reordering, or miscounting.
#[test]
fn given_mixed_features_when_parsed_skip_malformed_then_keeps_good_ones() {
    // GIVEN: good, bad, good, bad
    let body = json!({
        "features": [
            feature(6.0, "First", 1, "u1"),
            { "properties": { "mag": null, "place": "Pending", "time": 2, "url": "u2" } },
            feature(7.0, "Second", 3, "u3"),
            "not an object"
        ]
    })
    .to_string();

    // WHEN: Parsing with skip policy
    let parsed = parse_features(&body, ParsePolicy::SkipMalformed).unwrap();

    // THEN: Two records kept, two skipped
    let places: Vec<&str> = parsed.records.iter().map(|r| r.location()).collect();
    assert_eq!(places, ["First", "Second"]);
    assert_eq!(parsed.skipped, 2);
}

#[test]
fn given_non_json_body_when_parsed_skip_malformed_then_still_fails() {
    let err = parse_features("nope", ParsePolicy::SkipMalformed).unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}
