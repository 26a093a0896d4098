//! HTTP/JSON transport shared by the geocoding and forecast clients
//!
//! The single I/O boundary of the pipeline: one GET request, one parsed JSON
//! document or a typed failure. Retry policy, timeouts, and cancellation
//! belong to callers.

use serde_json::Value;
use thiserror::Error;

/// Errors at the transport boundary
#[derive(Debug, Error)]
pub enum ClientError {
    /// DNS, connect, or mid-transfer failure
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-200 status
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// A 200 response whose body is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

/// Issue a single GET request and parse the response body as JSON.
///
/// No custom headers, no retries. The body is read to completion before
/// parsing, so the connection is returned to the pool on every exit path,
/// including parse failure.
pub async fn fetch_json(http: &reqwest::Client, url: &str) -> Result<Value, ClientError> {
    let response = http.get(url).send().await.map_err(ClientError::Network)?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(ClientError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(ClientError::Network)?;
    serde_json::from_str(&body).map_err(ClientError::MalformedBody)
}
