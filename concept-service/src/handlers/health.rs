use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "concept-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness banner served on `/` and `/api/status`.
pub async fn status() -> impl IntoResponse {
    Json(json!({
        "status": "Active",
        "engine": "Gemini + Pollinations",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
