//! Open-Meteo geocoding API client
//!
//! Resolves a free-text place name to a ranked list of candidate locations.
//! The list is returned in the order the API ranks it; selection among
//! candidates is left to the caller.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::client::{fetch_json, ClientError};
use super::Location;

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Maximum number of candidates requested per query
const MAX_CANDIDATES: u8 = 10;

/// Errors that can occur when resolving a place name
#[derive(Debug, Error)]
pub enum GeoError {
    /// The query matched no locations (distinct from a transport failure)
    #[error("no matching locations found")]
    NotFound,

    /// The request itself failed
    #[error("geocoding request failed: {0}")]
    Transport(#[from] ClientError),
}

/// Geocoding response envelope; `results` is absent when nothing matched
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<Location>>,
}

/// Client for the Open-Meteo geocoding endpoint
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    /// Creates a new GeocodeClient against the public endpoint
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Creates a GeocodeClient against a custom base URL (local test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a place name to up to 10 candidate locations.
    ///
    /// Candidates keep the upstream relevance order; index 0 is the service's
    /// best match. Any string is accepted; whitespace is substituted with `+`
    /// (the separator the endpoint expects for multi-word names) and no other
    /// escaping is applied.
    ///
    /// # Returns
    /// * `Ok(Vec<Location>)` - non-empty candidate list
    /// * `Err(GeoError::NotFound)` - the query matched nothing
    /// * `Err(GeoError::Transport)` - the request or body parsing failed
    pub async fn geocode(&self, name: &str) -> Result<Vec<Location>, GeoError> {
        let url = format!(
            "{}?name={}&count={}&language=en&format=json",
            self.base_url,
            plus_separated(name),
            MAX_CANDIDATES
        );

        debug!(%url, "requesting geocoding candidates");
        let document = fetch_json(&self.http, &url).await?;
        let candidates = parse_candidates(document)?;
        debug!(count = candidates.len(), "geocoding candidates received");
        Ok(candidates)
    }
}

/// Extracts the candidate list from a geocoding response document
fn parse_candidates(document: Value) -> Result<Vec<Location>, GeoError> {
    let response: GeocodingResponse =
        serde_json::from_value(document).map_err(ClientError::MalformedBody)?;

    match response.results {
        Some(results) if !results.is_empty() => Ok(results),
        _ => Err(GeoError::NotFound),
    }
}

/// Replace every whitespace character with `+`, the separator the geocoding
/// endpoint expects for multi-word place names. Not full URL-encoding.
fn plus_separated(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plus_separated_spaces() {
        assert_eq!(plus_separated("New York"), "New+York");
    }

    #[test]
    fn test_plus_separated_mixed_whitespace() {
        assert_eq!(plus_separated("Rio\tde Janeiro"), "Rio+de+Janeiro");
    }

    #[test]
    fn test_plus_separated_single_word_unchanged() {
        assert_eq!(plus_separated("Ljubljana"), "Ljubljana");
    }

    #[test]
    fn test_parse_candidates_preserves_order() {
        let document = json!({
            "results": [
                {"name": "London", "latitude": 51.51, "longitude": -0.13, "country": "United Kingdom"},
                {"name": "London", "latitude": 42.98, "longitude": -81.25, "country": "Canada", "admin1": "Ontario"}
            ]
        });

        let candidates = parse_candidates(document).expect("Failed to parse candidates");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].country.as_deref(), Some("United Kingdom"));
        assert_eq!(candidates[1].admin1.as_deref(), Some("Ontario"));
    }

    #[test]
    fn test_parse_candidates_empty_results_is_not_found() {
        let result = parse_candidates(json!({"results": []}));
        assert!(matches!(result, Err(GeoError::NotFound)));
    }

    #[test]
    fn test_parse_candidates_missing_results_is_not_found() {
        let result = parse_candidates(json!({"generationtime_ms": 0.5}));
        assert!(matches!(result, Err(GeoError::NotFound)));
    }

    #[test]
    fn test_parse_candidates_wrong_shape_is_transport_error() {
        let result = parse_candidates(json!({"results": [{"name": "x"}]}));
        assert!(matches!(
            result,
            Err(GeoError::Transport(ClientError::MalformedBody(_)))
        ));
    }
}
