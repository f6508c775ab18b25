//! Mock provider implementations for testing.

use super::{ImageProvider, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

enum MockReply {
    Text(String),
    Error(String),
}

/// Mock text provider for testing. Records every prompt it receives.
pub struct MockTextProvider {
    reply: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Text(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Error(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Error(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Mock image provider for testing. Echoes the prompt back inside a
/// `mock://` URL so tests can see which prompt produced which view.
pub struct MockImageProvider {
    enabled: bool,
}

impl MockImageProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn image_url(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NetworkError(
                "Mock image provider not enabled".to_string(),
            ));
        }

        Ok(format!("mock://{}", prompt))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
