use crate::cli::FetchArgs;
use crate::error::QuakeReportError;

use quake_core::config::AppConfig;
use quake_core::usgs::ParsePolicy;
use quake_core::{FetchOutcome, UsgsClient};

use log::{debug, info};

/// Apply command-line overrides on top of the loaded config.
///
/// The result is validated, so a bad `--limit` is rejected the same way a
/// bad value in config.json is.
pub fn effective_config(
    mut config: AppConfig,
    args: &FetchArgs,
) -> Result<AppConfig, QuakeReportError> {
    if let Some(min_magnitude) = args.min_magnitude {
        config.usgs.min_magnitude = min_magnitude;
    }
    if let Some(order_by) = args.order_by {
        config.usgs.order_by = order_by.into();
    }
    if let Some(limit) = args.limit {
        config.usgs.limit = limit;
    }
    if args.skip_malformed {
        config.parse_policy = ParsePolicy::SkipMalformed;
    }

    config.validate()?;
    Ok(config)
}

/// Fetch earthquakes for `args`.
///
/// `--url` is used verbatim; otherwise the query is built from the config.
/// A failed fetch is returned as an outcome, not an error.
pub async fn run(config: &AppConfig, args: &FetchArgs) -> Result<FetchOutcome, QuakeReportError> {
    let client = UsgsClient::from_config(config)?;
    debug!("Parse policy: {:?}", client.parse_policy());

    let outcome = match &args.url {
        Some(url) => {
            info!("Fetching {url}");
            client.fetch(url).await
        }
        None => {
            let parameters = config.usgs.query_parameters();
            info!(
                "Fetching from {} (minmag {}, order by {}, limit {})",
                config.usgs.endpoint,
                parameters.min_magnitude,
                parameters.order_by.as_str(),
                parameters.limit
            );
            client.fetch_query(&config.usgs.endpoint, &parameters).await
        }
    };

    Ok(outcome)
}
