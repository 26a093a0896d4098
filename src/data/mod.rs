//! Core data models for Hourcast
//!
//! This module contains the value objects produced by the lookup pipeline:
//! geocoding candidates, the raw hourly forecast document, the current
//! conditions snapshot, and the per-hour records handed to presentation
//! consumers.

pub mod client;
pub mod conditions;
pub mod forecast;
pub mod geocode;
pub mod series;

pub use client::ClientError;
pub use conditions::{extract_current, hour_key};
pub use forecast::{ForecastClient, ForecastError, DEFAULT_TIMEZONE};
pub use geocode::{GeoError, GeocodeClient};
pub use series::{to_hourly_series, TransformError};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate location returned by the geocoding endpoint.
///
/// `country` and `admin1` are disambiguating metadata carried through
/// verbatim; the pipeline itself only consumes the coordinates. Latitude and
/// longitude ranges are guaranteed by the upstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Place name as resolved by the geocoder
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Country name, if the geocoder knows it
    #[serde(default)]
    pub country: Option<String>,
    /// First-level administrative region (state, province)
    #[serde(default)]
    pub admin1: Option<String>,
}

impl Location {
    /// Human-readable name including the disambiguating region and country.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.clone()];
        if let Some(admin1) = &self.admin1 {
            parts.push(admin1.clone());
        }
        if let Some(country) = &self.country {
            parts.push(country.clone());
        }
        parts.join(", ")
    }
}

/// The unmodified hourly document returned by the forecast endpoint.
///
/// All sequences are index-aligned: position `i` in every array refers to the
/// same hour. Field names match the wire format exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForecast {
    /// Hour labels, `YYYY-MM-DDTHH:00`, ascending
    pub time: Vec<String>,
    /// Temperature at 2m, degrees Celsius
    pub temperature_2m: Vec<f64>,
    /// Relative humidity at 2m, percent
    pub relativehumidity_2m: Vec<f64>,
    /// WMO weather code per hour
    pub weathercode: Vec<i32>,
    /// Wind speed at 10m, km/h
    pub windspeed_10m: Vec<f64>,
}

impl RawForecast {
    /// Number of forecast hours in the document.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the document covers no hours at all.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// True when every variable array is index-aligned with `time`.
    pub fn shape_is_consistent(&self) -> bool {
        let len = self.time.len();
        self.temperature_2m.len() == len
            && self.relativehumidity_2m.len() == len
            && self.weathercode.len() == len
            && self.windspeed_10m.len() == len
    }
}

/// The closed set of condition categories derived from WMO weather codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    /// Codes outside the mapped ranges (negative, 4-50, 68-70, 78-79, >=100)
    Unknown,
}

impl Condition {
    /// Map a WMO weather code to its condition category.
    ///
    /// Total over all integers; first match wins, ranges are disjoint.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Condition::Clear,
            1..=3 => Condition::Cloudy,
            51..=67 | 80..=99 => Condition::Rain,
            71..=77 => Condition::Snow,
            _ => Condition::Unknown,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Condition::Clear => "Clear",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Whether the current-conditions snapshot actually matched the wall-clock
/// hour, or degraded to the first forecast entry.
///
/// A `Stale` snapshot is still valid data; callers decide their own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Freshness {
    /// The snapshot's hour matched the current local hour
    Current,
    /// The forecast did not cover the current hour; values come from index 0
    Stale,
}

/// Single-hour weather snapshot aligned to "now".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Condition category for the snapshot hour
    pub condition: Condition,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// Whether the snapshot matched the current hour
    pub freshness: Freshness,
    /// The full raw document the snapshot was taken from
    pub forecast: RawForecast,
}

/// One hour of the forecast series, ready for charting consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour timestamp, interpreted as UTC
    pub time: DateTime<Utc>,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
}
