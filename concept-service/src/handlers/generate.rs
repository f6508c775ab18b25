use crate::models::{BuildRequest, ConceptResponse};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// `POST /api/generate`: build idea in, concept plus image views out.
///
/// Body rejections (bad JSON, wrong content type, missing `idea`) answer 422
/// with the same JSON error shape as validation failures.
pub async fn generate_concept(
    State(state): State<AppState>,
    payload: Result<Json<BuildRequest>, JsonRejection>,
) -> Result<Json<ConceptResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!(
        idea = %request.idea,
        style = %request.style,
        biome = %request.biome,
        scale = %request.scale,
        "Generating build concept"
    );

    let response = state.orchestrator.generate(&request).await?;
    Ok(Json(response))
}
