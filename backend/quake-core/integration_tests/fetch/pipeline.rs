//! End-to-end `fetch` behavior against a mock feed.

use crate::helpers::{collection, feature, query_url, serve};

use quake_core::config::{AppConfig, HttpConfig};
use quake_core::usgs::{OrderBy, ParsePolicy, QueryParameters};
use quake_core::{FailureKind, USGS_QUERY_PATH, UsgsClient, fetch};

use models::EarthquakeRecord;

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the full pipeline returns one verbatim record for one feature.
///
/// **WHY THIS MATTERS**: This is the core contract: what USGS publishes is what the list
/// shows.
///
/// **BUG THIS CATCHES**: Would catch any stage (URL, HTTP, parse) altering the data.
#[tokio::test]
async fn given_single_feature_response_when_fetched_then_returns_one_matching_record() {
    // GIVEN: A feed serving one feature
    let body = collection(vec![feature(
        6.2,
        "10km NE of Somewhere",
        1_500_000_000_000,
        "https://earthquake.usgs.gov/earthquakes/eventpage/us1000abcd",
    )]);
    let server = serve(ResponseTemplate::new(200).set_body_string(body)).await;

    // WHEN: Fetching through the free function
    let outcome = fetch(&query_url(&server)).await;

    // THEN: One record, no failure
    assert!(outcome.is_success());
    assert_eq!(
        outcome.records,
        vec![EarthquakeRecord::new(
            6.2,
            "10km NE of Somewhere",
            1_500_000_000_000,
            "https://earthquake.usgs.gov/earthquakes/eventpage/us1000abcd",
        )]
    );
}

#[tokio::test]
async fn given_empty_features_when_fetched_then_returns_no_records_and_no_failure() {
    let server = serve(ResponseTemplate::new(200).set_body_string(collection(vec![]))).await;

    let outcome = fetch(&query_url(&server)).await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failure, None);
}

#[tokio::test]
async fn given_non_json_body_when_fetched_then_reports_malformed_response() {
    let server =
        serve(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>")).await;

    let outcome = fetch(&query_url(&server)).await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failure, Some(FailureKind::MalformedResponse));
}

/// **VALUE**: Verifies the default all-or-nothing policy end to end.
///
/// **BUG THIS CATCHES**: Would catch the client ignoring its configured policy and
/// returning a partial list with no failure.
#[tokio::test]
async fn given_feature_missing_mag_when_fetched_then_whole_result_is_empty() {
    // GIVEN: Two good features and one without `mag`
    let body = json!({
        "features": [
            feature(6.0, "A", 1, "u1"),
            { "properties": { "place": "B", "time": 2, "url": "u2" } },
            feature(6.5, "C", 3, "u3")
        ]
    })
    .to_string();
    let server = serve(ResponseTemplate::new(200).set_body_string(body)).await;

    // WHEN: Fetching with defaults
    let outcome = fetch(&query_url(&server)).await;

    // THEN: Nothing kept
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failure, Some(FailureKind::MalformedResponse));
}

#[tokio::test]
async fn given_feature_missing_mag_when_fetched_with_skip_policy_then_keeps_the_rest() {
    let body = json!({
        "features": [
            feature(6.0, "A", 1, "u1"),
            { "properties": { "place": "B", "time": 2, "url": "u2" } },
            feature(6.5, "C", 3, "u3")
        ]
    })
    .to_string();
    let server = serve(ResponseTemplate::new(200).set_body_string(body)).await;
    let client = UsgsClient::new(&HttpConfig::default())
        .unwrap()
        .with_parse_policy(ParsePolicy::SkipMalformed);

    let outcome = client.fetch(&query_url(&server)).await;

    assert_eq!(outcome.failure, None);
    assert_eq!(outcome.skipped, 1);
    let places: Vec<&str> = outcome.records.iter().map(|r| r.location()).collect();
    assert_eq!(places, ["A", "C"]);
}

#[tokio::test]
async fn given_404_when_fetched_then_reports_http_status_error() {
    let server = serve(ResponseTemplate::new(404).set_body_string("Not Found")).await;

    let outcome = fetch(&query_url(&server)).await;

    assert!(outcome.records.is_empty());
    assert_eq!(
        outcome.failure,
        Some(FailureKind::HttpStatusError { code: 404 })
    );
}

/// **VALUE**: Verifies a non-200 success code is still a failure and its body is ignored.
///
/// **BUG THIS CATCHES**: Would catch `is_success()` (any 2xx) replacing the 200 check.
#[tokio::test]
async fn given_203_with_valid_body_when_fetched_then_reports_http_status_error() {
    let body = collection(vec![feature(6.0, "A", 1, "u1")]);
    let server = serve(ResponseTemplate::new(203).set_body_string(body)).await;

    let outcome = fetch(&query_url(&server)).await;

    assert!(outcome.records.is_empty());
    assert_eq!(
        outcome.failure,
        Some(FailureKind::HttpStatusError { code: 203 })
    );
}

/// **VALUE**: Verifies an unparsable query string fails without touching the network.
///
/// **BUG THIS CATCHES**: Would catch the request being sent before URL validation.
#[tokio::test]
async fn given_unparsable_query_string_when_fetched_then_reports_invalid_url_without_request()
{
    // GIVEN: A running server that must stay untouched
    let server = MockServer::start().await;

    // WHEN: Fetching a string that is not a URL
    let outcome = fetch("not a url").await;

    // THEN: InvalidUrl and no request reached the server
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failure, Some(FailureKind::InvalidUrl));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn given_closed_port_when_fetched_then_reports_transport_error() {
    // GIVEN: A port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    // WHEN: Fetching from it
    let outcome = fetch(&format!("http://127.0.0.1:{port}{USGS_QUERY_PATH}")).await;

    // THEN: Transport failure
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failure, Some(FailureKind::TransportError));
}

/// **VALUE**: Verifies the configured read timeout actually bounds a request.
///
/// **WHY THIS MATTERS**: A feed that accepts the connection and then stalls would otherwise
/// hang the fetch forever.
///
/// **BUG THIS CATCHES**: Would catch `read_timeout` no longer being applied to the HTTP client.
#[tokio::test]
async fn given_response_slower_than_read_timeout_when_fetched_then_reports_transport_error() {
    // GIVEN: A client with a short read timeout and a feed that answers much later
    let client = UsgsClient::new(&HttpConfig {
        read_timeout_ms: 200,
        ..HttpConfig::default()
    })
    .unwrap();
    let body = collection(vec![feature(6.2, "Slow", 1, "u")]);
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_string(body)
            .set_delay(Duration::from_millis(1500)),
    )
    .await;

    // WHEN: Fetching
    let outcome = client.fetch(&query_url(&server)).await;

    // THEN: The timeout surfaces as a transport failure with no records
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failure, Some(FailureKind::TransportError));
}

/// **VALUE**: Verifies `fetch_query` sends the configured parameters to the feed.
///
/// **WHY THIS MATTERS**: Minimum magnitude and order-by are the user's query preferences;
/// if they are not sent, the list ignores the user's settings.
#[tokio::test]
async fn given_query_parameters_when_fetch_query_called_then_feed_receives_them() {
    // GIVEN: A feed that only answers the exact expected query
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USGS_QUERY_PATH))
        .and(query_param("format", "geojson"))
        .and(query_param("eventtype", "earthquake"))
        .and(query_param("orderby", "magnitude"))
        .and(query_param("minmag", "4.5"))
        .and(query_param("limit", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(collection(vec![feature(8.1, "Big one", 5, "u")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.usgs.endpoint = query_url(&server);
    config.usgs.min_magnitude = 4.5;
    config.usgs.order_by = OrderBy::Magnitude;
    config.usgs.limit = 3;
    let client = UsgsClient::from_config(&config).unwrap();

    // WHEN: Fetching via the parameter builder
    let outcome = client
        .fetch_query(&config.usgs.endpoint, &config.usgs.query_parameters())
        .await;

    // THEN: The mock matched and the record came back
    assert!(outcome.is_success(), "failure: {:?}", outcome.failure);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].magnitude(), 8.1);
}

#[tokio::test]
async fn given_invalid_endpoint_when_fetch_query_called_then_reports_invalid_url() {
    let client = UsgsClient::new(&HttpConfig::default()).unwrap();

    let outcome = client
        .fetch_query("earthquake.usgs.gov", &QueryParameters::default())
        .await;

    assert_eq!(outcome.failure, Some(FailureKind::InvalidUrl));
}

/// **VALUE**: Verifies one client can serve concurrent fetches.
///
/// **WHY THIS MATTERS**: The client holds no per-request state; callers share one
/// instance across tasks.
#[tokio::test]
async fn given_shared_client_when_fetching_concurrently_then_each_call_is_independent() {
    let good = serve(
        ResponseTemplate::new(200).set_body_string(collection(vec![feature(6.0, "A", 1, "u")])),
    )
    .await;
    let bad = serve(ResponseTemplate::new(500)).await;
    let client = UsgsClient::new(&HttpConfig::default()).unwrap();

    let good_url = query_url(&good);
    let bad_url = query_url(&bad);
    let (first, second) = tokio::join!(client.fetch(&good_url), client.fetch(&bad_url));

    assert_eq!(first.records.len(), 1);
    assert_eq!(first.failure, None);
    assert!(second.records.is_empty());
    assert_eq!(
        second.failure,
        Some(FailureKind::HttpStatusError { code: 500 })
    );
}
