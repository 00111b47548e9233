//! Wire payload types and per-call options.
//!
//! Request shapes follow the Gemini `generateContent` JSON contract. The
//! response envelope is not modeled as a struct: extraction works over the
//! decoded [`Value`] so that part shapes this crate does not know about pass
//! through untouched (and survive raw mode byte-for-byte).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Gemini content container used in requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload used for vision requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Top-level `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<Map<String, Value>>,
}

/// Per-call overrides. Consumed by a single operation call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Model ID overriding the configured default for the operation's mode.
    pub model: Option<String>,
    /// Caller-supplied `generationConfig`. `generate_text` and
    /// `process_image_text` attach it verbatim (full replace); `generate_image`
    /// shallow-merges it over the default config, caller keys winning.
    pub generation_config: Option<Map<String, Value>>,
    /// Return the decoded response body as-is instead of extracting.
    pub raw: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_generation_config(mut self, config: Map<String, Value>) -> Self {
        self.generation_config = Some(config);
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }
}

/// Result of a text or vision operation.
#[derive(Debug, Clone, PartialEq)]
pub enum TextOutput {
    /// Concatenated `text` fields of the first candidate's parts.
    Text(String),
    /// The decoded response body, untouched (`options.raw`).
    Raw(Value),
}

impl TextOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(body) => Some(body),
            Self::Text(_) => None,
        }
    }
}

/// Normalized result of an image generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// Concatenated text parts, possibly empty.
    pub text: String,
    /// `data:image/png;base64,...` URI from the first inline image part, if any.
    pub image_url: Option<String>,
}

/// Result of an image generation operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageOutput {
    Image(GeneratedImage),
    /// The decoded response body, untouched (`options.raw`).
    Raw(Value),
}

impl ImageOutput {
    pub fn as_image(&self) -> Option<&GeneratedImage> {
        match self {
            Self::Image(image) => Some(image),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(body) => Some(body),
            Self::Image(_) => None,
        }
    }
}
