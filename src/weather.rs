//! OpenWeatherMap forecast client.
//!
//! Fetches the 5-day / 3-hour forecast and converts the provider payload
//! into the crate's [`Observation`] model. Upstream causes are logged here;
//! callers only see [`ForecastError::Upstream`].

use tracing::{debug, error, info};

use crate::Result;
use crate::districts::Coordinates;
use crate::error::ForecastError;
use crate::models::{Condition, Observation};

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fetch the forecast observation list for a coordinate pair.
///
/// # Errors
///
/// Returns [`ForecastError::Upstream`] on network failure, a non-success
/// status, or an undecodable response body.
pub async fn fetch_forecast(
    client: &reqwest::Client,
    api_key: &str,
    coordinates: Coordinates,
) -> Result<Vec<Observation>> {
    let url = format!(
        "{FORECAST_URL}?lat={}&lon={}&appid={}&units=metric",
        coordinates.latitude, coordinates.longitude, api_key
    );

    debug!(
        latitude = coordinates.latitude,
        longitude = coordinates.longitude,
        "requesting 3-hour forecast"
    );

    let response = client.get(&url).send().await.map_err(|e| {
        // reqwest errors render the request URL, which carries the API key
        error!("OpenWeather request failed: {}", e.without_url());
        ForecastError::upstream("forecast request failed")
    })?;

    let status = response.status();
    if !status.is_success() {
        error!("OpenWeather returned {status}");
        return Err(ForecastError::upstream(format!(
            "unexpected status {status}"
        )));
    }

    let body: openweather::ForecastResponse = response.json().await.map_err(|e| {
        error!("failed to decode OpenWeather response: {}", e.without_url());
        ForecastError::upstream("undecodable response body")
    })?;

    info!(samples = body.list.len(), "received forecast payload");

    body.list.into_iter().map(to_observation).collect()
}

fn to_observation(entry: openweather::ForecastEntry) -> Result<Observation> {
    let timestamp = chrono::NaiveDateTime::parse_from_str(&entry.dt_txt, TIMESTAMP_FORMAT)
        .map_err(|e| {
            error!("unparseable forecast timestamp '{}': {e}", entry.dt_txt);
            ForecastError::upstream("unparseable forecast timestamp")
        })?;

    Ok(Observation {
        timestamp,
        temp: entry.main.temp,
        temp_min: entry.main.temp_min,
        temp_max: entry.main.temp_max,
        humidity: entry.main.humidity,
        wind_speed: entry.wind.speed,
        pressure: entry.main.pressure,
        conditions: entry
            .weather
            .into_iter()
            .map(|info| Condition {
                main: info.main,
                description: info.description,
                icon: info.icon,
            })
            .collect(),
    })
}

/// OpenWeatherMap API response structures
mod openweather {
    use serde::Deserialize;

    /// 5-day / 3-hour forecast response
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
    }

    /// One 3-hour forecast sample
    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        /// Timestamp as "YYYY-MM-DD HH:MM:SS"
        pub dt_txt: String,
        pub main: MainMeasurements,
        pub wind: Wind,
        #[serde(default)]
        pub weather: Vec<WeatherInfo>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainMeasurements {
        pub temp: f64,
        pub temp_min: f64,
        pub temp_max: f64,
        pub pressure: u32,
        pub humidity: u32,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct WeatherInfo {
        pub main: String,
        pub description: String,
        pub icon: String,
    }
}
