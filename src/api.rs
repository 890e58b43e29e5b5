//! HTTP API routes.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::post};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::ForecastError;
use crate::models::{WeatherRequest, WeatherResponse};
use crate::{API_CLIENT, aggregate, districts, weather};

pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/weather", post(district_forecast))
        .with_state(config)
}

/// Handler for `POST /api/weather`: daily forecast for a named district.
///
/// District validation and the credential check run before any upstream
/// work; aggregation only ever sees a complete successful payload. A body
/// without a usable district name gets the same client error as an unknown
/// district.
async fn district_forecast(
    State(config): State<AppConfig>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> crate::Result<Json<WeatherResponse>> {
    let district = match payload {
        Ok(Json(request)) => request.district,
        Err(rejection) => {
            warn!("rejected unreadable weather request: {rejection}");
            return Err(ForecastError::invalid_district("(unreadable request)"));
        }
    };

    let coordinates = districts::coordinates_for(&district).ok_or_else(|| {
        warn!(%district, "rejected unknown district");
        ForecastError::invalid_district(&district)
    })?;

    let api_key = config.api_key()?;

    let observations = weather::fetch_forecast(&API_CLIENT, api_key, coordinates).await?;
    let forecasts = aggregate::aggregate(&observations)?;

    info!(%district, days = forecasts.len(), "served daily forecast");

    Ok(Json(WeatherResponse {
        district,
        forecasts,
    }))
}
