//! Pollinations image provider.
//!
//! Pollinations renders on request, so "generating" an image is just building
//! the URL; the client's first GET triggers the render.

use super::{ImageProvider, ProviderError};
use async_trait::async_trait;
use rand::Rng;
use std::ops::RangeInclusive;

/// Pollinations API base URL.
pub const POLLINATIONS_API_BASE: &str = "https://image.pollinations.ai";

/// Seeds are drawn from this range for every URL so repeated prompts
/// still yield fresh images.
pub const SEED_RANGE: RangeInclusive<u32> = 1..=999_999;

/// Pollinations provider configuration.
#[derive(Debug, Clone)]
pub struct PollinationsConfig {
    pub api_base: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
}

impl Default for PollinationsConfig {
    fn default() -> Self {
        Self {
            api_base: POLLINATIONS_API_BASE.to_string(),
            width: 1024,
            height: 576,
            model: "flux".to_string(),
        }
    }
}

pub struct PollinationsImageProvider {
    config: PollinationsConfig,
}

impl PollinationsImageProvider {
    pub fn new(config: PollinationsConfig) -> Self {
        Self { config }
    }

    /// Build the render URL for a prompt with an explicit seed.
    pub fn url_for(&self, prompt: &str, seed: u32) -> String {
        format!(
            "{}/prompt/{}?width={}&height={}&nologo=true&seed={}&model={}",
            self.config.api_base.trim_end_matches('/'),
            urlencoding::encode(prompt),
            self.config.width,
            self.config.height,
            seed,
            urlencoding::encode(&self.config.model),
        )
    }
}

#[async_trait]
impl ImageProvider for PollinationsImageProvider {
    async fn image_url(&self, prompt: &str) -> Result<String, ProviderError> {
        if prompt.trim().is_empty() {
            return Err(ProviderError::InvalidRequest(
                "Image prompt must not be empty".to_string(),
            ));
        }

        let seed = rand::thread_rng().gen_range(SEED_RANGE);
        Ok(self.url_for(prompt, seed))
    }

    fn name(&self) -> &'static str {
        "pollinations"
    }
}
