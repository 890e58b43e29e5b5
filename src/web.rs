//! Server assembly: routes, CORS, static pages.

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::config::AppConfig;

/// Build the full application router. Static pages (`index.html`,
/// `input.html`, `output.html`) are served from `public/`.
pub fn app(config: AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(config))
        .fallback_service(ServeDir::new("public"))
        .layer(cors)
}

pub async fn run(config: AppConfig) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        "Harvest Nexus server running at http://localhost:{}",
        config.port
    );

    axum::serve(listener, app(config))
        .await
        .context("server terminated unexpectedly")
}
