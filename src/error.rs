//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The API reported a non-success status. `message` comes from the
    /// response's `error.message` field when present.
    #[error("Gemini API error: {message} (status {status})")]
    Api { message: String, status: u16 },

    #[error("Invalid image format provided")]
    InvalidImageFormat,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
