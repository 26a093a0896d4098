//! Open-Meteo forecast API client
//!
//! Fetches the raw hourly forecast document for a coordinate pair and
//! validates its index-aligned shape before handing it downstream.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::client::{fetch_json, ClientError};
use super::RawForecast;

/// Base URL for the Open-Meteo forecast API
const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Hourly variables requested from the endpoint, in wire order
const HOURLY_VARIABLES: &str = "temperature_2m,relativehumidity_2m,weathercode,windspeed_10m";

/// Timezone used for the forecast's hour labels unless overridden
pub const DEFAULT_TIMEZONE: &str = "Europe/Ljubljana";

/// Errors that can occur when fetching a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The hourly arrays in the response are not all the same length
    #[error("hourly arrays have inconsistent lengths")]
    InconsistentShape,

    /// The request itself failed
    #[error("forecast request failed: {0}")]
    Transport(#[from] ClientError),
}

/// Forecast response envelope; only the hourly block is consumed
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: RawForecast,
}

/// Client for the Open-Meteo forecast endpoint
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
    timezone: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Creates a new ForecastClient with the default timezone
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: FORECAST_BASE_URL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Sets the IANA timezone the endpoint uses for hour labels
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Points the client at a custom base URL (local test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the raw hourly forecast for the given coordinates.
    ///
    /// # Returns
    /// * `Ok(RawForecast)` - shape-validated hourly document
    /// * `Err(ForecastError::InconsistentShape)` - arrays of unequal length
    /// * `Err(ForecastError::Transport)` - the request or body parsing failed
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawForecast, ForecastError> {
        let url = format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone={}",
            self.base_url, latitude, longitude, HOURLY_VARIABLES, self.timezone
        );

        debug!(%url, "requesting hourly forecast");
        let document = fetch_json(&self.http, &url).await?;
        parse_document(document)
    }
}

/// Extracts and shape-validates the hourly block of a forecast response
fn parse_document(document: Value) -> Result<RawForecast, ForecastError> {
    let response: ForecastResponse =
        serde_json::from_value(document).map_err(ClientError::MalformedBody)?;

    let forecast = response.hourly;
    if !forecast.shape_is_consistent() {
        return Err(ForecastError::InconsistentShape);
    }
    Ok(forecast)
}
