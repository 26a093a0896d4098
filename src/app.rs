//! End-to-end lookup pipeline
//!
//! Chains geocoding, forecast retrieval, and the two derivations into one
//! operation: place name in, location plus snapshot plus hourly series out.

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::data::{
    extract_current, to_hourly_series, CurrentConditions, ForecastClient, ForecastError, GeoError,
    GeocodeClient, HourlyRecord, Location, TransformError,
};

/// Errors that can occur during a full lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// Place-name resolution failed
    #[error("geocoding failed: {0}")]
    Geocoding(#[from] GeoError),

    /// Forecast retrieval failed
    #[error("forecast retrieval failed: {0}")]
    Forecast(#[from] ForecastError),

    /// Series conversion failed
    #[error("hourly series conversion failed: {0}")]
    Series(#[from] TransformError),

    /// The forecast document covered no hours
    #[error("forecast contains no hourly entries")]
    EmptyForecast,
}

/// Everything a presentation layer needs for one place
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// The location the forecast was fetched for
    pub location: Location,
    /// Snapshot aligned to the given wall-clock instant
    pub current: CurrentConditions,
    /// Full forecast horizon, one record per hour
    pub hourly: Vec<HourlyRecord>,
}

/// Pipeline owning the geocoding and forecast clients
#[derive(Debug, Clone)]
pub struct App {
    geocoder: GeocodeClient,
    forecast: ForecastClient,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an App wired against the public endpoints
    pub fn new() -> Self {
        Self {
            geocoder: GeocodeClient::new(),
            forecast: ForecastClient::new(),
        }
    }

    /// Creates an App from preconfigured clients (custom base URLs, tests)
    pub fn with_clients(geocoder: GeocodeClient, forecast: ForecastClient) -> Self {
        Self { geocoder, forecast }
    }

    /// Sets the forecast timezone, forwarding to the forecast client
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.forecast = self.forecast.with_timezone(timezone);
        self
    }

    /// Run the full pipeline for a place name.
    ///
    /// Takes the geocoder's first candidate; the upstream relevance ranking
    /// decides. Callers that want their own disambiguation should use
    /// [`GeocodeClient::geocode`] directly and fetch per candidate.
    ///
    /// `now` is the wall-clock instant the snapshot is aligned to; pass
    /// `Local::now().naive_local()` outside of tests.
    pub async fn lookup(
        &self,
        place: &str,
        now: NaiveDateTime,
    ) -> Result<WeatherReport, LookupError> {
        let candidates = self.geocoder.geocode(place).await?;
        let location = candidates.into_iter().next().ok_or(GeoError::NotFound)?;
        debug!(
            name = %location.name,
            latitude = location.latitude,
            longitude = location.longitude,
            "resolved place to best candidate"
        );

        let raw = self
            .forecast
            .fetch_forecast(location.latitude, location.longitude)
            .await?;

        let hourly = to_hourly_series(&raw)?;
        let current = extract_current(raw, now).ok_or(LookupError::EmptyForecast)?;

        Ok(WeatherReport {
            location,
            current,
            hourly,
        })
    }
}
