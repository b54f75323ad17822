//! Failure reporting through an injected `FailureReporter`.

use crate::helpers::{RecordingReporter, collection, feature, query_url, serve};

use quake_core::config::HttpConfig;
use quake_core::{FailureKind, UsgsClient};

use std::sync::Arc;

use wiremock::ResponseTemplate;

/// **VALUE**: Verifies every caught failure reaches the injected reporter exactly once.
///
/// **WHY THIS MATTERS**: The reporter is the only place the detailed error survives;
/// callers only get the kind.
///
/// **BUG THIS CATCHES**: Would catch failures being swallowed without a report, or
/// reported twice on the way out.
#[tokio::test]
async fn given_failing_fetches_when_reporter_injected_then_each_failure_is_reported_once() {
    // GIVEN: A client with a recording reporter
    let reporter = Arc::new(RecordingReporter::default());
    let client = UsgsClient::new(&HttpConfig::default())
        .unwrap()
        .with_reporter(reporter.clone());
    let not_found = serve(ResponseTemplate::new(404)).await;
    let garbage = serve(ResponseTemplate::new(200).set_body_string("garbage")).await;

    // WHEN: Three different failures
    client.fetch("not a url").await;
    client.fetch(&query_url(&not_found)).await;
    client.fetch(&query_url(&garbage)).await;

    // THEN: Three reports in order
    assert_eq!(
        reporter.kinds(),
        vec![
            FailureKind::InvalidUrl,
            FailureKind::HttpStatusError { code: 404 },
            FailureKind::MalformedResponse,
        ]
    );
}

#[tokio::test]
async fn given_successful_fetch_when_reporter_injected_then_nothing_is_reported() {
    let reporter = Arc::new(RecordingReporter::default());
    let client = UsgsClient::new(&HttpConfig::default())
        .unwrap()
        .with_reporter(reporter.clone());
    let server = serve(
        ResponseTemplate::new(200).set_body_string(collection(vec![feature(6.0, "A", 1, "u")])),
    )
    .await;

    let outcome = client.fetch(&query_url(&server)).await;

    assert!(outcome.is_success());
    assert!(reporter.kinds().is_empty());
}
