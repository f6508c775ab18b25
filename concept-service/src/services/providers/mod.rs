//! AI provider abstractions and implementations.
//!
//! Text providers turn a prompt into free text; image providers turn a prompt
//! into an image URL. Gemini and Pollinations back the real service, the mock
//! module backs tests.

pub mod gemini;
pub mod mock;
pub mod pollinations;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Short provider name for logs and metrics.
    fn name(&self) -> &'static str;
}

/// Trait for image generation providers (e.g., Pollinations).
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Produce a URL the client can load the rendered image from.
    async fn image_url(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Short provider name for logs and metrics.
    fn name(&self) -> &'static str;
}
