//! HTTP route handlers for the greeting server.

use axum::Json;

use crate::dto::HealthResponse;

/// The greeting served at `/`.
const GREETING: &str = "Hello, Pankti!";

/// Greeting endpoint.
pub async fn greet() -> &'static str {
    GREETING
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
