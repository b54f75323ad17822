//! `fetch_body` against a mock server: status handling and the no-URL path.

use crate::helpers::{query_url, serve};

use quake_core::FailureKind;
use quake_core::usgs::http::fetch_body;

use reqwest::Client;
use url::Url;
use wiremock::matchers::{header_exists, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies that no URL means no request and an empty body.
///
/// **WHY THIS MATTERS**: Connection release must only be attempted on something that was
/// actually opened. With no URL nothing is opened at all.
///
/// **BUG THIS CATCHES**: Would catch a default URL being substituted, or an error being
/// raised for the deliberate no-op.
#[tokio::test]
async fn given_no_url_when_fetching_body_then_returns_empty_without_request() {
    // GIVEN: A server that would accept anything
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Fetching with no URL
    let body = fetch_body(&Client::new(), None).await.unwrap();

    // THEN: Empty body, zero requests
    assert!(body.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn given_200_when_fetching_body_then_returns_body_verbatim() {
    let server = serve(ResponseTemplate::new(200).set_body_string("{\"features\":[]}")).await;
    let url = Url::parse(&query_url(&server)).unwrap();

    let body = fetch_body(&Client::new(), Some(&url)).await.unwrap();

    assert_eq!(body, "{\"features\":[]}");
}

#[tokio::test]
async fn given_500_when_fetching_body_then_returns_http_status_error() {
    let server = serve(ResponseTemplate::new(500).set_body_string("boom")).await;
    let url = Url::parse(&query_url(&server)).unwrap();

    let err = fetch_body(&Client::new(), Some(&url)).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::HttpStatusError { code: 500 });
}

/// **VALUE**: Verifies the request is a plain GET with no body requirements.
#[tokio::test]
async fn given_url_when_fetching_body_then_sends_get_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("host"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/anything", server.uri())).unwrap();

    let body = fetch_body(&Client::new(), Some(&url)).await.unwrap();

    assert_eq!(body, "ok");
    server.verify().await;
}
