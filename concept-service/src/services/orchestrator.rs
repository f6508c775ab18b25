//! Build concept orchestration.
//!
//! One request flows text model → JSON cleanup → image views → merged
//! response. A text model that fails or answers with something other than a
//! concept never fails the request; the deterministic fallback concept is
//! used instead.

use crate::models::{BuildRequest, Concept, ConceptResponse, ImageSet, View};
use crate::services::prompts;
use crate::services::providers::{ImageProvider, ProviderError, TextProvider};
use metrics::counter;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
enum ConceptError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Malformed concept JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct ConceptOrchestrator {
    text_provider: Arc<dyn TextProvider>,
    image_provider: Arc<dyn ImageProvider>,
}

impl ConceptOrchestrator {
    pub fn new(text_provider: Arc<dyn TextProvider>, image_provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            text_provider,
            image_provider,
        }
    }

    /// Produce a concept and its four image views for `request`.
    ///
    /// Only an image provider failure is surfaced, as `AppError::BadGateway`.
    pub async fn generate(&self, request: &BuildRequest) -> Result<ConceptResponse, AppError> {
        let mut concept = self.concept_for(request).await;

        if concept.image_prompt.trim().is_empty() {
            concept.image_prompt = prompts::default_image_prompt(request);
        }
        // `images` is owned by this service, never by the model.
        concept.extra.remove("images");

        let images = self.render_views(&concept.image_prompt).await?;

        Ok(ConceptResponse { concept, images })
    }

    async fn concept_for(&self, request: &BuildRequest) -> Concept {
        let prompt = prompts::concept_prompt(request);

        match self.request_concept(&prompt).await {
            Ok(concept) => {
                counter!("concept_generations_total", "outcome" => "generated").increment(1);
                tracing::info!(
                    provider = self.text_provider.name(),
                    title = %concept.title,
                    "Concept generated"
                );
                concept
            }
            Err(e) => {
                counter!("concept_generations_total", "outcome" => "fallback").increment(1);
                tracing::warn!(
                    provider = self.text_provider.name(),
                    error = %e,
                    idea = %request.idea,
                    "Concept generation failed, using fallback concept"
                );
                Concept::fallback(request)
            }
        }
    }

    async fn request_concept(&self, prompt: &str) -> Result<Concept, ConceptError> {
        let raw = self.text_provider.generate(prompt).await?;
        let cleaned = prompts::strip_code_fences(&raw);
        Ok(serde_json::from_str(&cleaned)?)
    }

    async fn render_views(&self, base_prompt: &str) -> Result<ImageSet, AppError> {
        Ok(ImageSet {
            cinematic: self.render(View::Cinematic, base_prompt).await?,
            palette: self.render(View::Palette, base_prompt).await?,
            angle: self.render(View::Angle, base_prompt).await?,
            blueprint: self.render(View::Blueprint, base_prompt).await?,
        })
    }

    async fn render(&self, view: View, base_prompt: &str) -> Result<String, AppError> {
        self.image_provider
            .image_url(&view.decorate(base_prompt))
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = self.image_provider.name(),
                    view = %view,
                    error = %e,
                    "Image generation failed"
                );
                AppError::BadGateway(format!("image generation failed for {} view: {}", view, e))
            })
    }
}
