//! Fetching and parsing the USGS earthquake feed.
//!
//! The pipeline is URL → GET → JSON → records. Each stage returns
//! `Result<_, QueryError>`; [`UsgsClient::fetch`] is the boundary where a
//! failure is reported and turned into an empty [`FetchOutcome`].

pub mod http;
pub mod parse;
pub mod query;

pub use parse::{ParsePolicy, ParsedFeatures, parse_features};
pub use query::{OrderBy, QueryParameters, build_query_url, parse_query_url};

use crate::config::{AppConfig, HttpConfig};
use crate::error::query::{FailureKind, QueryError};
use crate::report::{FailureReporter, LogReporter};

use models::EarthquakeRecord;

use std::sync::Arc;

use log::{debug, info};
use reqwest::Client;
use serde::Serialize;

/// Result of one fetch: the records, and the failure if there was one.
///
/// When `failure` is set, `records` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchOutcome {
    pub records: Vec<EarthquakeRecord>,
    pub failure: Option<FailureKind>,
    /// Features dropped under [`ParsePolicy::SkipMalformed`].
    pub skipped: usize,
}

impl FetchOutcome {
    fn failed(kind: FailureKind) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(kind),
            skipped: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Stateless handle on the feed. Cheap to clone and safe to share.
#[derive(Clone)]
pub struct UsgsClient {
    client: Client,
    policy: ParsePolicy,
    reporter: Arc<dyn FailureReporter>,
}

impl UsgsClient {
    /// Client with the given timeouts, all-or-nothing parsing and a
    /// [`LogReporter`].
    pub fn new(http: &HttpConfig) -> Result<Self, QueryError> {
        let client = Client::builder()
            .connect_timeout(http.connect_timeout())
            .read_timeout(http.read_timeout())
            .build()?;

        Ok(Self {
            client,
            policy: ParsePolicy::default(),
            reporter: Arc::new(LogReporter),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, QueryError> {
        Ok(Self::new(&config.http)?.with_parse_policy(config.parse_policy))
    }

    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Fetch and parse `query_url`. Never fails: problems are reported and
    /// come back as `FetchOutcome::failure`.
    pub async fn fetch(&self, query_url: &str) -> FetchOutcome {
        match self.try_fetch(query_url).await {
            Ok(parsed) => {
                info!(
                    "Fetched {} earthquakes ({} skipped)",
                    parsed.records.len(),
                    parsed.skipped
                );
                FetchOutcome {
                    records: parsed.records,
                    failure: None,
                    skipped: parsed.skipped,
                }
            }
            Err(e) => self.fail(e),
        }
    }

    /// Build a query from `parameters` against `endpoint` and fetch it.
    pub async fn fetch_query(&self, endpoint: &str, parameters: &QueryParameters) -> FetchOutcome {
        match build_query_url(endpoint, parameters) {
            Ok(url) => self.fetch(url.as_str()).await,
            Err(e) => self.fail(e),
        }
    }

    async fn try_fetch(&self, query_url: &str) -> Result<ParsedFeatures, QueryError> {
        let url = parse_query_url(query_url)?;
        let body = http::fetch_body(&self.client, Some(&url)).await?;
        parse_features(&body, self.policy)
    }

    fn fail(&self, error: QueryError) -> FetchOutcome {
        debug!("Fetch failed at {}", error.location());
        self.reporter.report(&error);
        FetchOutcome::failed(error.kind())
    }
}

/// Fetch `query_url` with default timeouts, all-or-nothing parsing and
/// failures written to the log.
pub async fn fetch(query_url: &str) -> FetchOutcome {
    match UsgsClient::new(&HttpConfig::default()) {
        Ok(client) => client.fetch(query_url).await,
        Err(e) => {
            LogReporter.report(&e);
            FetchOutcome::failed(e.kind())
        }
    }
}
