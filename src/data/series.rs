//! Hourly-series transformation
//!
//! Converts the raw hourly document into the ordered, fully materialized
//! sequence of per-hour records that charting consumers read.

use chrono::NaiveDateTime;
use thiserror::Error;

use super::{HourlyRecord, RawForecast};

/// Timestamp format used by the forecast endpoint's hour labels
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Errors that can occur during series conversion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// An hour label did not parse as `YYYY-MM-DDTHH:MM`
    #[error("malformed timestamp at index {0}")]
    MalformedTimestamp(usize),
}

/// Convert a shape-validated forecast into one record per hour, in input
/// order.
///
/// Hour labels are naive local timestamps and are interpreted as UTC without
/// conversion; shifting them would change every displayed hour label
/// downstream.
pub fn to_hourly_series(forecast: &RawForecast) -> Result<Vec<HourlyRecord>, TransformError> {
    let mut records = Vec::with_capacity(forecast.len());

    for (i, label) in forecast.time.iter().enumerate() {
        let time = NaiveDateTime::parse_from_str(label, TIME_FORMAT)
            .map_err(|_| TransformError::MalformedTimestamp(i))?
            .and_utc();

        records.push(HourlyRecord {
            time,
            temperature: forecast.temperature_2m[i],
            humidity: forecast.relativehumidity_2m[i],
            windspeed: forecast.windspeed_10m[i],
        });
    }

    Ok(records)
}
