// Unit tests for query URL parsing and construction

use crate::FailureKind;
use crate::USGS_QUERY_ENDPOINT;
use crate::usgs::{OrderBy, QueryParameters, build_query_url, parse_query_url};

use std::collections::HashMap;

fn pairs(url: &url::Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}

/// **VALUE**: Verifies garbage input is rejected as `InvalidUrl` before any I/O.
///
/// **BUG THIS CATCHES**: Would catch a relative-URL fallback that turns "not a url" into
/// a request against some base.
#[test]
fn given_unparsable_string_when_parsing_then_returns_invalid_url() {
    for input in ["not a url", "", "://missing-scheme", "http://"] {
        let err = parse_query_url(input).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidUrl, "input: {input:?}");
    }
}

#[test]
fn given_non_http_scheme_when_parsing_then_returns_invalid_url() {
    let err = parse_query_url("ftp://earthquake.usgs.gov/feed").unwrap_err();

    assert_eq!(err.kind(), FailureKind::InvalidUrl);
    assert!(err.to_string().contains("Unsupported URL scheme: ftp"));
}

#[test]
fn given_usgs_query_url_when_parsing_then_keeps_it_intact() {
    let input = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&limit=10";

    let url = parse_query_url(input).unwrap();

    assert_eq!(url.as_str(), input);
}

/// **VALUE**: Verifies the composed query carries every parameter the feed needs.
///
/// **WHY THIS MATTERS**: Without `format=geojson` the feed answers in QuakeML (XML), which
/// the parser reports as malformed on every request.
///
/// **BUG THIS CATCHES**: Would catch a dropped or misspelled query parameter.
#[test]
fn given_default_parameters_when_building_then_url_has_geojson_query() {
    // GIVEN: Defaults
    let parameters = QueryParameters::default();

    // WHEN: Building against the production endpoint
    let url = build_query_url(USGS_QUERY_ENDPOINT, &parameters).unwrap();

    // THEN: Path and parameters match the feed contract
    assert_eq!(url.host_str(), Some("earthquake.usgs.gov"));
    assert_eq!(url.path(), "/fdsnws/event/1/query");
    let query = pairs(&url);
    assert_eq!(query["format"], "geojson");
    assert_eq!(query["eventtype"], "earthquake");
    assert_eq!(query["orderby"], "time");
    assert_eq!(query["minmag"], "6");
    assert_eq!(query["limit"], "10");
}

#[test]
fn given_custom_parameters_when_building_then_values_are_encoded() {
    let parameters = QueryParameters {
        min_magnitude: 4.5,
        order_by: OrderBy::Magnitude,
        limit: 250,
    };

    let url = build_query_url("http://localhost:8080/query?starttime=2017-01-01", &parameters)
        .unwrap();

    let query = pairs(&url);
    assert_eq!(query["starttime"], "2017-01-01");
    assert_eq!(query["orderby"], "magnitude");
    assert_eq!(query["minmag"], "4.5");
    assert_eq!(query["limit"], "250");
}

#[test]
fn given_invalid_endpoint_when_building_then_returns_invalid_url() {
    let err = build_query_url("usgs", &QueryParameters::default()).unwrap_err();

    assert_eq!(err.kind(), FailureKind::InvalidUrl);
}
