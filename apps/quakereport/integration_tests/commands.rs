//! Command functions driven against a mock feed and a temporary config dir.

use quakereport::cli::{ConfigCommands, FetchArgs};
use quakereport::commands;
use quakereport::render::render_text;

use quake_core::config::AppConfig;
use quake_core::{FailureKind, USGS_QUERY_PATH};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn body() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [
            { "properties": { "mag": 7.3, "place": "Off the coast", "time": 1_500_000_000_000_i64,
                              "url": "https://earthquake.usgs.gov/e/1" } },
            { "properties": { "mag": 6.1, "place": "Inland", "time": 1_499_000_000_000_i64,
                              "url": "https://earthquake.usgs.gov/e/2" } }
        ]
    })
    .to_string()
}

/// **VALUE**: Verifies `fetch` builds the query from config plus overrides and lists the
/// results.
///
/// **WHY THIS MATTERS**: This is the whole user-facing path minus argument parsing.
#[tokio::test]
async fn given_configured_endpoint_when_fetch_runs_then_lists_records() {
    // GIVEN: A feed expecting the overridden magnitude
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USGS_QUERY_PATH))
        .and(query_param("minmag", "5.5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body()))
        .expect(1)
        .mount(&server)
        .await;
    let mut config = AppConfig::default();
    config.usgs.endpoint = format!("{}{USGS_QUERY_PATH}", server.uri());
    let args = FetchArgs {
        min_magnitude: Some(5.5),
        ..FetchArgs::default()
    };

    // WHEN: Running the fetch command
    let config = commands::fetch::effective_config(config, &args).unwrap();
    let outcome = commands::fetch::run(&config, &args).await.unwrap();

    // THEN: Both records rendered in feed order
    assert!(outcome.is_success());
    let text = render_text(&outcome);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Off the coast"));
    assert!(lines[1].contains("Inland"));
}

#[tokio::test]
async fn given_explicit_url_when_fetch_runs_then_url_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body()))
        .expect(1)
        .mount(&server)
        .await;
    let args = FetchArgs {
        url: Some(format!("{}/custom", server.uri())),
        ..FetchArgs::default()
    };

    let outcome = commands::fetch::run(&AppConfig::default(), &args)
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 2);
}

#[tokio::test]
async fn given_server_error_when_fetch_runs_then_outcome_carries_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let args = FetchArgs {
        url: Some(format!("{}{USGS_QUERY_PATH}", server.uri())),
        ..FetchArgs::default()
    };

    let outcome = commands::fetch::run(&AppConfig::default(), &args)
        .await
        .unwrap();

    assert_eq!(
        outcome.failure,
        Some(FailureKind::HttpStatusError { code: 503 })
    );
    assert!(render_text(&outcome).contains("Reason: HTTP status 503"));
}

/// **VALUE**: Verifies `config init` writes defaults once and refuses to clobber.
///
/// **BUG THIS CATCHES**: Would catch `init` silently overwriting hand-edited settings.
#[test]
fn given_config_dir_when_init_runs_twice_then_second_needs_force() {
    // GIVEN: An empty config directory
    let dir = TempDir::new().unwrap();
    let init = ConfigCommands::Init { force: false };

    // WHEN: Running init twice
    let first = commands::config::run(&init, dir.path());
    let second = commands::config::run(&init, dir.path());
    let forced = commands::config::run(&ConfigCommands::Init { force: true }, dir.path());

    // THEN: First writes, second refuses, forced overwrites
    assert!(first.unwrap().starts_with("Wrote "));
    assert!(second.unwrap_err().to_string().contains("--force"));
    assert!(forced.is_ok());
    assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());
}

#[test]
fn given_corrupt_config_when_init_forced_then_file_is_replaced() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

    let result = commands::config::run(&ConfigCommands::Init { force: true }, dir.path());

    assert!(result.is_ok());
    assert!(AppConfig::load(dir.path()).is_ok());
}

#[test]
fn given_saved_config_when_show_runs_then_prints_it_as_json() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.usgs.limit = 77;
    config.save(dir.path()).unwrap();

    let shown = commands::config::run(&ConfigCommands::Show, dir.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&shown).unwrap();

    assert_eq!(json["usgs"]["limit"], 77);
    assert_eq!(json["parse_policy"], "all_or_nothing");
}
