//! Domain and wire types for forecasts.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One sub-daily (3-hour interval) weather sample from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Timestamp of the sample, provider-local
    pub timestamp: NaiveDateTime,
    /// Temperature in Celsius
    pub temp: f64,
    /// Minimum temperature within the interval
    pub temp_min: f64,
    /// Maximum temperature within the interval
    pub temp_max: f64,
    /// Relative humidity percentage
    pub humidity: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Weather conditions; the provider emits an array, normally with one
    /// entry. An empty list makes the observation unusable for aggregation.
    pub conditions: Vec<Condition>,
}

impl Observation {
    /// Calendar date this observation belongs to.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Weather condition attached to an observation
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Coarse category used for majority voting, e.g. "Clear" or "Rain"
    pub main: String,
    /// Free-text description, e.g. "light rain"
    pub description: String,
    /// Provider icon identifier
    pub icon: String,
}

/// One-record-per-day forecast summary.
///
/// Field names follow the established response contract, including the
/// camelCase `dayOfWeek`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: String,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Rounded average humidity percentage
    pub humidity: u32,
    /// Dominant weather category for the day
    pub description: String,
    /// Icon from the day's first observation
    pub icon: String,
    /// Average wind speed, formatted to one decimal place
    pub wind_speed: String,
    /// Pressure from the day's first observation
    pub pressure: u32,
}

/// Request body for `POST /api/weather`
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub district: String,
}

/// Successful response for `POST /api/weather`
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub district: String,
    pub forecasts: Vec<DailySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_observation_date_truncation() {
        let observation = Observation {
            timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(21, 0, 0)
                .unwrap(),
            temp: 25.0,
            temp_min: 24.0,
            temp_max: 26.0,
            humidity: 60,
            wind_speed: 3.0,
            pressure: 1008,
            conditions: vec![],
        };

        assert_eq!(
            observation.date(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_daily_summary_wire_format() {
        let summary = DailySummary {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            day_of_week: "Sat".to_string(),
            temp_min: 19.0,
            temp_max: 25.0,
            humidity: 62,
            description: "Clear".to_string(),
            icon: "01d".to_string(),
            wind_speed: "3.2".to_string(),
            pressure: 1008,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["dayOfWeek"], "Sat");
        assert_eq!(json["wind_speed"], "3.2");
        assert_eq!(json["humidity"], 62);
    }
}
