use crate::error::query::QueryError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use log::{debug, trace};
use reqwest::Client;
use url::Url;

/// GET `url` and return the body of a `200 OK` response.
///
/// `None` means there is nothing to fetch: an empty body comes back and no
/// request is made. The response owns the connection and is dropped on every
/// return path, including the error ones.
pub async fn fetch_body(client: &Client, url: Option<&Url>) -> Result<String, QueryError> {
    let Some(url) = url else {
        debug!("No query URL, skipping request");
        return Ok(String::new());
    };

    debug!("GET {url}");
    let response = client.get(url.clone()).send().await?;

    let status = HttpStatusCode::from(response.status().as_u16());
    if !status.is_ok() {
        return Err(QueryError::HttpStatus {
            code: status,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let body = response.text().await?;
    trace!("Read {} bytes from {url}", body.len());

    Ok(body)
}
