//! Current-conditions extraction
//!
//! Aligns the raw hourly document to the wall-clock hour and produces the
//! single-hour snapshot. The clock is a parameter, never read here, so the
//! alignment is deterministic under test.

use chrono::NaiveDateTime;

use super::{Condition, CurrentConditions, Freshness, RawForecast};

/// Format a timestamp the way the forecast API keys its hourly entries:
/// `YYYY-MM-DDTHH:00`, zero-padded, 24-hour, minutes and seconds dropped.
pub fn hour_key(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:00").to_string()
}

/// Extract the current-conditions snapshot from a shape-validated forecast.
///
/// Scans `forecast.time` for a case-insensitive match on `hour_key(now)` and
/// takes the first matching index. When the forecast horizon does not cover
/// the current hour (clock or timezone skew), the snapshot degrades to index
/// 0 and is marked `Freshness::Stale`, still usable data rather than an
/// error.
///
/// The forecast is consumed and stored on the snapshot so downstream
/// consumers can derive the hourly series without a second fetch.
///
/// Returns `None` only when the document covers no hours at all.
pub fn extract_current(forecast: RawForecast, now: NaiveDateTime) -> Option<CurrentConditions> {
    if forecast.is_empty() {
        return None;
    }

    let key = hour_key(now);
    let (index, freshness) = match forecast
        .time
        .iter()
        .position(|entry| entry.eq_ignore_ascii_case(&key))
    {
        Some(index) => (index, Freshness::Current),
        None => (0, Freshness::Stale),
    };

    Some(CurrentConditions {
        temperature: forecast.temperature_2m[index],
        condition: Condition::from_code(forecast.weathercode[index]),
        humidity: forecast.relativehumidity_2m[index] as u8,
        windspeed: forecast.windspeed_10m[index],
        freshness,
        forecast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 9, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn sample_forecast() -> RawForecast {
        RawForecast {
            time: vec!["2023-09-02T00:00".to_string(), "2023-09-02T01:00".to_string()],
            temperature_2m: vec![10.0, 11.0],
            relativehumidity_2m: vec![80.0, 75.0],
            weathercode: vec![0, 2],
            windspeed_10m: vec![5.0, 6.0],
        }
    }

    #[test]
    fn test_hour_key_drops_minutes() {
        assert_eq!(hour_key(at(1, 5)), "2023-09-02T01:00");
    }

    #[test]
    fn test_hour_key_zero_padded() {
        assert_eq!(hour_key(at(9, 59)), "2023-09-02T09:00");
    }

    #[test]
    fn test_extract_current_matches_hour() {
        let current = extract_current(sample_forecast(), at(1, 30)).expect("non-empty forecast");

        assert!((current.temperature - 11.0).abs() < 0.01);
        assert_eq!(current.condition, Condition::Cloudy);
        assert_eq!(current.humidity, 75);
        assert!((current.windspeed - 6.0).abs() < 0.01);
        assert_eq!(current.freshness, Freshness::Current);
    }

    #[test]
    fn test_extract_current_falls_back_to_first_hour() {
        // 14:00 is outside the two-hour horizon
        let current = extract_current(sample_forecast(), at(14, 0)).expect("non-empty forecast");

        assert!((current.temperature - 10.0).abs() < 0.01);
        assert_eq!(current.condition, Condition::Clear);
        assert_eq!(current.humidity, 80);
        assert_eq!(current.freshness, Freshness::Stale);
    }

    #[test]
    fn test_extract_current_match_is_case_insensitive() {
        let mut forecast = sample_forecast();
        forecast.time[1] = "2023-09-02t01:00".to_string();

        let current = extract_current(forecast, at(1, 0)).expect("non-empty forecast");
        assert_eq!(current.freshness, Freshness::Current);
        assert!((current.temperature - 11.0).abs() < 0.01);
    }

    #[test]
    fn test_extract_current_keeps_raw_document() {
        let current = extract_current(sample_forecast(), at(0, 0)).expect("non-empty forecast");
        assert_eq!(current.forecast.len(), 2);
        assert_eq!(current.forecast.time[0], "2023-09-02T00:00");
    }

    #[test]
    fn test_extract_current_empty_forecast_is_none() {
        let empty = RawForecast {
            time: vec![],
            temperature_2m: vec![],
            relativehumidity_2m: vec![],
            weathercode: vec![],
            windspeed_10m: vec![],
        };
        assert!(extract_current(empty, at(1, 0)).is_none());
    }
}
