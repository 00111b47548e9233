//! Image input classification for vision requests.
//!
//! Callers hand the client an image as a string (already-base64 payload, file
//! path, or raw binary), an uploaded-file style handle, or plain bytes.
//! Normalization turns any of these into the base64 string the wire format
//! wants.

use crate::{Error, Result};
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Uploaded-file style handle exposing its on-disk location.
///
/// Returning `None` means the handle has no backing file; normalization fails
/// with [`Error::InvalidImageFormat`] in that case.
pub trait FileHandle: Send + Sync {
    fn real_path(&self) -> Option<PathBuf>;
}

/// Image payload accepted by `process_image_text`.
pub enum ImageInput {
    /// A string payload, classified by [`ImageInput::normalize`] in this
    /// order: base64-alphabet match (passed through unchanged), existing file
    /// path (read and encoded), anything else (raw bytes, encoded). The first
    /// check wins, so a plain alphanumeric file name without an extension is
    /// treated as base64 even when a file of that name exists.
    Text(String),
    /// An uploaded-file handle; the file at `real_path()` is read and encoded.
    Handle(Box<dyn FileHandle>),
    /// Raw image bytes, encoded directly.
    Bytes(Vec<u8>),
}

impl ImageInput {
    /// Resolve the input to a base64 string.
    pub fn normalize(&self) -> Result<String> {
        match self {
            Self::Text(payload) => {
                if is_base64_payload(payload) {
                    return Ok(payload.clone());
                }
                if Path::new(payload).exists() {
                    return Ok(encode(&fs::read(payload)?));
                }
                Ok(encode(payload.as_bytes()))
            }
            Self::Handle(handle) => {
                let path = handle.real_path().ok_or(Error::InvalidImageFormat)?;
                Ok(encode(&fs::read(path)?))
            }
            Self::Bytes(bytes) => Ok(encode(bytes)),
        }
    }
}

impl From<&str> for ImageInput {
    fn from(payload: &str) -> Self {
        Self::Text(payload.to_string())
    }
}

impl From<String> for ImageInput {
    fn from(payload: String) -> Self {
        Self::Text(payload)
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// True when the whole string matches `[A-Za-z0-9+/]+={0,2}`.
///
/// No minimum length or MIME-prefix check is applied, so a short alphanumeric
/// string meant as a file name also matches.
fn is_base64_payload(payload: &str) -> bool {
    let body = payload.trim_end_matches('=');
    if body.is_empty() || payload.len() - body.len() > 2 {
        return false;
    }
    body.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}
