//! Error types for the forecast service.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire shape for error responses: `{ "error": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Main error type for the Harvest Nexus service.
///
/// The `Display` output is internal detail for logs only; clients see
/// [`ForecastError::user_message`].
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Requested district is not in the known set
    #[error("unknown district: {name}")]
    InvalidDistrict { name: String },

    /// Required upstream credential is absent or left as a placeholder
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Weather provider call failed (network error, bad status, or body)
    #[error("upstream failure: {message}")]
    Upstream { message: String },

    /// An observation lacks the fields needed for aggregation
    #[error("malformed observation: {message}")]
    MalformedObservation { message: String },
}

impl ForecastError {
    /// Create a new invalid-district error
    pub fn invalid_district<S: Into<String>>(name: S) -> Self {
        Self::InvalidDistrict { name: name.into() }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new malformed-observation error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedObservation {
            message: message.into(),
        }
    }

    /// Get the user-facing error message
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::InvalidDistrict { .. } => {
                "Invalid district selected. Please choose a valid district from the list."
            }
            ForecastError::Config { .. } => {
                "OpenWeather API key not configured. Please add your API key to the .env file."
            }
            ForecastError::Upstream { .. } => {
                "Failed to fetch weather data from OpenWeatherMap. Please check your API key and try again."
            }
            ForecastError::MalformedObservation { .. } => {
                "Internal server error. Please try again later."
            }
        }
    }

    /// HTTP status this error maps to at the boundary
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ForecastError::InvalidDistrict { .. } => StatusCode::BAD_REQUEST,
            ForecastError::Config { .. }
            | ForecastError::Upstream { .. }
            | ForecastError::MalformedObservation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ForecastError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }
        (
            status,
            Json(ErrorBody {
                error: self.user_message().to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let district_err = ForecastError::invalid_district("Atlantis");
        assert!(matches!(district_err, ForecastError::InvalidDistrict { .. }));

        let config_err = ForecastError::config("missing API key");
        assert!(matches!(config_err, ForecastError::Config { .. }));

        let upstream_err = ForecastError::upstream("connection refused");
        assert!(matches!(upstream_err, ForecastError::Upstream { .. }));
    }

    #[test]
    fn test_user_messages() {
        let district_err = ForecastError::invalid_district("Atlantis");
        assert!(district_err.user_message().contains("Invalid district"));

        let config_err = ForecastError::config("test");
        assert!(config_err.user_message().contains("API key not configured"));

        let upstream_err = ForecastError::upstream("test");
        assert!(upstream_err.user_message().contains("OpenWeatherMap"));

        // Core defects surface as a generic internal error, never as detail.
        let malformed_err = ForecastError::malformed("no condition");
        assert!(malformed_err.user_message().contains("Internal server error"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ForecastError::invalid_district("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ForecastError::config("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ForecastError::upstream("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ForecastError::malformed("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
