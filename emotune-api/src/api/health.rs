//! Service info and health check endpoints

use axum::{routing::get, Json, Router};

use emotune_common::api::{HealthResponse, ServiceInfo};

use crate::AppState;

/// GET /
///
/// Service banner for quick manual checks.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "EmoTune API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/health".to_string(),
    })
}

/// GET /health
///
/// Health check endpoint for monitoring. Does NOT require authentication.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "emotune-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
