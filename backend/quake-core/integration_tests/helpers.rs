//! Test helpers for fetch integration tests.
//!
//! Builds USGS-shaped GeoJSON bodies and mock servers that serve them.

use quake_core::error::query::QueryError;
use quake_core::{FailureKind, FailureReporter, USGS_QUERY_PATH};

use std::sync::Mutex;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn feature(mag: f64, place: &str, time: i64, url: &str) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "mag": mag,
            "place": place,
            "time": time,
            "updated": time + 60_000,
            "url": url,
            "status": "reviewed",
            "type": "earthquake"
        },
        "geometry": { "type": "Point", "coordinates": [-117.6, 35.7, 8.0] }
    })
}

pub fn collection(features: Vec<Value>) -> String {
    json!({
        "type": "FeatureCollection",
        "metadata": { "count": features.len(), "status": 200 },
        "features": features
    })
    .to_string()
}

/// Mock server answering GET on the USGS query path with `response`.
pub async fn serve(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USGS_QUERY_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

pub fn query_url(server: &MockServer) -> String {
    format!("{}{USGS_QUERY_PATH}", server.uri())
}

/// Reporter that remembers what it was told.
#[derive(Default)]
pub struct RecordingReporter {
    pub reported: Mutex<Vec<FailureKind>>,
}

impl FailureReporter for RecordingReporter {
    fn report(&self, error: &QueryError) {
        self.reported.lock().unwrap().push(error.kind());
    }
}

impl RecordingReporter {
    pub fn kinds(&self) -> Vec<FailureKind> {
        self.reported.lock().unwrap().clone()
    }
}
