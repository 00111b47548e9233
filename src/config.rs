//! Client configuration
//!
//! A fully-formed [`ClientConfig`] is passed into the client constructor, so
//! the client itself holds no implicit global state. `from_env` is a
//! convenience loader for the common deployment shape.

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
const DEFAULT_VISION_MODEL: &str = "gemini-2.0-flash";

/// Default model IDs per operation mode.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub text: String,
    pub image: String,
    pub vision: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_MODEL.to_string(),
            image: DEFAULT_IMAGE_MODEL.to_string(),
            vision: DEFAULT_VISION_MODEL.to_string(),
        }
    }
}

/// Immutable client configuration: API key, endpoint base URL, and the
/// per-mode model defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub models: ModelConfig,
}

impl ClientConfig {
    /// Build a config against the production endpoint with default models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            models: ModelConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_models(mut self, models: ModelConfig) -> Self {
        self.models = models;
        self
    }

    /// Load configuration from the environment (and `.env` when present).
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_BASE_URL`, `GEMINI_TEXT_MODEL`,
    /// `GEMINI_IMAGE_MODEL`, and `GEMINI_VISION_MODEL` fall back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?,
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            models: ModelConfig {
                text: std::env::var("GEMINI_TEXT_MODEL")
                    .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
                image: std::env::var("GEMINI_IMAGE_MODEL")
                    .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
                vision: std::env::var("GEMINI_VISION_MODEL")
                    .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string()),
            },
        })
    }
}
