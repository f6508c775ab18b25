use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use crate::services::providers::pollinations::{PollinationsConfig, POLLINATIONS_API_BASE};
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ConceptConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub images: ImageSettings,
    /// OTLP collector for span export; unset disables export.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Missing key is tolerated: the service starts and every concept falls
    /// back until one is provided.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub api_base: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
}

impl ConceptConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(ConceptConfig {
            common,
            gemini: GeminiSettings {
                api_key: optional_env("GEMINI_API_KEY").map(Secret::new),
                model: get_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_env("GEMINI_API_BASE", GEMINI_API_BASE),
                timeout_secs: parse_env("GEMINI_TIMEOUT_SECS", DEFAULT_GEMINI_TIMEOUT_SECS)?,
            },
            images: ImageSettings {
                api_base: get_env("IMAGE_API_BASE", POLLINATIONS_API_BASE),
                width: parse_env("IMAGE_WIDTH", 1024)?,
                height: parse_env("IMAGE_HEIGHT", 576)?,
                model: get_env("IMAGE_MODEL", "flux"),
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini.api_key.clone(),
            model: self.gemini.model.clone(),
            api_base: self.gemini.api_base.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        }
    }

    pub fn pollinations_config(&self) -> PollinationsConfig {
        PollinationsConfig {
            api_base: self.images.api_base.clone(),
            width: self.images.width,
            height: self.images.height,
            model: self.images.model.clone(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}
