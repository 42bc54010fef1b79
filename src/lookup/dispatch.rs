//! Table-driven request dispatch
//!
//! One outbound GET per invocation: validate the supplied parameters
//! against the endpoint's declared table, attach them in declared order,
//! send, and assert the response status against the expected one. No
//! retries, no caching, no response-body interpretation.

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument, warn};

use crate::error::LookupError;
use crate::lookup::query::QueryParams;
use crate::lookup::routes::Endpoint;

/// A raw service response: status, headers and body, owned by the caller.
///
/// The body is left uninterpreted. The URL is the final request URL
/// including the query string.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// The status code as a bare integer.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// A response header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Resolves the supplied parameters against the endpoint's declared table.
///
/// Returns the pairs to attach, in declared order. Required parameters
/// must be present (an empty string counts as present); parameters outside
/// the declared set are rejected before any request is issued.
pub(crate) fn resolve_query<'q>(
    endpoint: Endpoint,
    query: &'q QueryParams,
) -> Result<Vec<(&'static str, &'q str)>, LookupError> {
    let spec = endpoint.spec();

    for (name, _) in query.iter() {
        if !spec.params.iter().any(|param| param.name == name) {
            return Err(LookupError::unknown_param(spec.name, name));
        }
    }

    let mut pairs = Vec::with_capacity(query.len());
    for param in spec.params {
        match query.get(param.name) {
            Some(value) => pairs.push((param.name, value)),
            None if param.required => {
                return Err(LookupError::missing_param(spec.name, param.name));
            }
            None => {}
        }
    }
    Ok(pairs)
}

/// Issues a single GET against `base_uri` + the endpoint path and asserts
/// the response status.
///
/// The full response is read regardless of the status; on a mismatch it
/// travels inside the returned [`LookupError::StatusMismatch`] so the
/// caller can still inspect it.
#[instrument(skip(client, query), fields(endpoint = endpoint.name()))]
pub(crate) async fn dispatch(
    client: &Client,
    base_uri: &str,
    endpoint: Endpoint,
    query: &QueryParams,
    expected_status: StatusCode,
) -> Result<ApiResponse, LookupError> {
    let pairs = resolve_query(endpoint, query)?;
    let url = endpoint.url(base_uri);
    info!("Fetching data from URL: {url}");

    let mut request = client.get(&url);
    if !pairs.is_empty() {
        request = request.query(&pairs);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {url}: {e}");
            return Err(if e.is_timeout() {
                LookupError::network_timeout(&url)
            } else if e.is_connect() {
                LookupError::network_connection(&url, e.to_string())
            } else {
                LookupError::Http(e)
            });
        }
    };

    let status = response.status();
    let headers = response.headers().clone();
    let final_url = response.url().to_string();

    debug!("Response status: {status}");

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {final_url}: {e}");
            return Err(LookupError::Http(e));
        }
    };
    debug!("Response length: {} bytes", body.len());

    let response = ApiResponse {
        url: final_url.clone(),
        status,
        headers,
        body,
    };

    if status != expected_status {
        warn!(
            "Status assertion failed for {final_url}: expected {}, got {}",
            expected_status.as_u16(),
            status.as_u16()
        );
        return Err(LookupError::status_mismatch(
            expected_status.as_u16(),
            status.as_u16(),
            final_url,
            response,
        ));
    }

    Ok(response)
}
