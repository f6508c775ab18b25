use axum::{http::header, response::IntoResponse};
use service_core::observability::render_metrics;

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        render_metrics(),
    )
}
