//! Liveness handlers

use axum::Json;
use serde::Serialize;

/// Plain-text liveness string on `/`, kept byte-exact for existing probes.
pub async fn home() -> &'static str {
    "Cloudburst Prediction API is running!"
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
