//! Environment-backed configuration.
//!
//! Settings come from the process environment (a `.env` file is loaded at
//! startup). The upstream credential is validated per request, so the
//! server still starts without one and reports a configuration error to
//! callers instead.

use std::env;

use anyhow::{Context, Result};

use crate::error::ForecastError;

/// Environment variable holding the OpenWeatherMap credential.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Template value shipped in `.env.example`; counts as no key at all.
const API_KEY_PLACEHOLDER: &str = "your_openweather_api_key_here";

const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    api_key: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn new(port: u16, api_key: Option<String>) -> Self {
        Self { port, api_key }
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            api_key: env::var(API_KEY_VAR).ok(),
        })
    }

    /// The upstream credential.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Config`] when the key is absent, empty, or
    /// still the `.env` template placeholder.
    pub fn api_key(&self) -> crate::Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() && key != API_KEY_PLACEHOLDER => Ok(key),
            _ => Err(ForecastError::config(format!(
                "{API_KEY_VAR} missing or left as placeholder"
            ))),
        }
    }
}
