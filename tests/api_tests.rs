//! Router-level tests for the weather endpoint.
//!
//! These exercise validation and configuration failures, which are decided
//! before any upstream call, so no network access is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use harvest_nexus::config::AppConfig;
use harvest_nexus::web;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_weather(config: AppConfig, body: Value) -> (StatusCode, Value) {
    let app = web::app(config);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/weather")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, value)
}

#[tokio::test]
async fn unknown_district_is_a_client_error() {
    let config = AppConfig::new(3000, Some("test-key".to_string()));
    let (status, body) = post_weather(config, json!({ "district": "Atlantis" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid district selected. Please choose a valid district from the list."
    );
}

#[tokio::test]
async fn missing_district_field_is_a_client_error() {
    let config = AppConfig::new(3000, Some("test-key".to_string()));
    let (status, body) = post_weather(config, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid district selected. Please choose a valid district from the list."
    );
}

#[tokio::test]
async fn empty_district_is_a_client_error() {
    let config = AppConfig::new(3000, Some("test-key".to_string()));
    let (status, body) = post_weather(config, json!({ "district": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid district selected. Please choose a valid district from the list."
    );
}

#[tokio::test]
async fn missing_api_key_fails_fast_without_upstream_call() {
    let config = AppConfig::new(3000, None);
    let (status, body) = post_weather(config, json!({ "district": "Cuttack" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "OpenWeather API key not configured. Please add your API key to the .env file."
    );
}

#[tokio::test]
async fn placeholder_api_key_counts_as_missing() {
    let config = AppConfig::new(3000, Some("your_openweather_api_key_here".to_string()));
    let (status, body) = post_weather(config, json!({ "district": "Puri" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "OpenWeather API key not configured. Please add your API key to the .env file."
    );
}

#[tokio::test]
async fn district_check_runs_before_credential_check() {
    // Unknown district with no key configured: the client error wins.
    let config = AppConfig::new(3000, None);
    let (status, body) = post_weather(config, json!({ "district": "Atlantis" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid district selected. Please choose a valid district from the list."
    );
}
