//! Thin client for the Google Gemini `generateContent` REST API.
//!
//! One stateless [`GeminiClient`] covers three operation modes: plain text
//! generation, image generation, and image-plus-text "vision" prompts. The
//! client builds the JSON payload, posts it, validates the response, and
//! either extracts a normalized result or hands back the raw decoded body.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod image;
pub mod types;

pub use client::GeminiClient;
pub use config::{ClientConfig, ModelConfig};
pub use error::{Error, Result};
pub use image::{FileHandle, ImageInput};
pub use types::{GeneratedImage, ImageOutput, RequestOptions, TextOutput};
