//! Harvest Nexus — district-level weather forecasts for Odisha agriculture.
//!
//! Fetches the OpenWeatherMap 5-day / 3-hour forecast for a named district
//! and condenses it into at most seven daily summaries. The aggregation in
//! [`aggregate`] is the heart of the crate; everything else is the HTTP
//! plumbing around it.

use std::sync::LazyLock;
use std::time::Duration;

pub mod aggregate;
pub mod api;
pub mod config;
pub mod districts;
pub mod error;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::ForecastError;
pub use models::{DailySummary, Observation};

/// Shared HTTP client for outbound provider calls.
pub static API_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("default client configuration is valid")
});

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ForecastError>;
