//! The Gemini `generateContent` client.

use crate::config::ClientConfig;
use crate::extract;
use crate::image::ImageInput;
use crate::types::{
    Content, GenerateContentRequest, ImageOutput, InlineData, Part, RequestOptions, TextOutput,
};
use crate::{Error, Result};
use reqwest::Client;
use serde_json::{json, Map, Value};

/// Stateless client for text, image, and vision prompts.
///
/// Holds only immutable configuration and a connection pool, so one instance
/// can be shared across concurrent calls without coordination. No timeout or
/// retry policy is applied; the transport's defaults pass through.
pub struct GeminiClient {
    client: Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::new_with_client(config, Client::new())
    }

    /// Construct with an externally owned `reqwest::Client`, so callers can
    /// reuse one connection pool across services.
    pub fn new_with_client(config: ClientConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Generate text from a prompt.
    ///
    /// `options.generation_config` is attached verbatim when non-empty; there
    /// are no defaults to merge with.
    pub async fn generate_text(
        &self,
        prompt: &str,
        options: RequestOptions,
    ) -> Result<TextOutput> {
        self.generate_text_inner(prompt, options)
            .await
            .map_err(|e| {
                tracing::error!("Gemini API error (Text): {}", e);
                e
            })
    }

    /// Generate an image from a text prompt.
    ///
    /// The request always asks for `response_modalities: ["TEXT", "IMAGE"]`;
    /// caller `generation_config` keys are shallow-merged on top of that
    /// default, unlike the full-replace policy of the other two operations.
    pub async fn generate_image(
        &self,
        prompt: &str,
        options: RequestOptions,
    ) -> Result<ImageOutput> {
        self.generate_image_inner(prompt, options)
            .await
            .map_err(|e| {
                tracing::error!("Gemini API error (Image): {}", e);
                e
            })
    }

    /// Ask a text question about an image.
    ///
    /// The image is normalized to base64 first (see [`ImageInput::normalize`])
    /// and sent as an `image/jpeg` inline part after the prompt.
    pub async fn process_image_text(
        &self,
        prompt: &str,
        image: ImageInput,
        options: RequestOptions,
    ) -> Result<TextOutput> {
        self.process_image_text_inner(prompt, image, options)
            .await
            .map_err(|e| {
                tracing::error!("Gemini API error (Vision): {}", e);
                e
            })
    }

    async fn generate_text_inner(
        &self,
        prompt: &str,
        options: RequestOptions,
    ) -> Result<TextOutput> {
        let RequestOptions {
            model,
            generation_config,
            raw,
        } = options;
        let model = model.unwrap_or_else(|| self.config.models.text.clone());

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: generation_config.filter(|config| !config.is_empty()),
        };

        let body = self.post_generate_content(&model, &request).await?;

        Ok(if raw {
            TextOutput::Raw(body)
        } else {
            TextOutput::Text(extract::extract_text(&body))
        })
    }

    async fn generate_image_inner(
        &self,
        prompt: &str,
        options: RequestOptions,
    ) -> Result<ImageOutput> {
        let RequestOptions {
            model,
            generation_config,
            raw,
        } = options;
        let model = model.unwrap_or_else(|| self.config.models.image.clone());

        let mut merged: Map<String, Value> = Map::new();
        merged.insert(
            "response_modalities".to_string(),
            json!(["TEXT", "IMAGE"]),
        );
        if let Some(overrides) = generation_config {
            for (key, value) in overrides {
                merged.insert(key, value);
            }
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(merged),
        };

        let body = self.post_generate_content(&model, &request).await?;

        Ok(if raw {
            ImageOutput::Raw(body)
        } else {
            ImageOutput::Image(extract::extract_image(&body))
        })
    }

    async fn process_image_text_inner(
        &self,
        prompt: &str,
        image: ImageInput,
        options: RequestOptions,
    ) -> Result<TextOutput> {
        let RequestOptions {
            model,
            generation_config,
            raw,
        } = options;
        let model = model.unwrap_or_else(|| self.config.models.vision.clone());

        let base64_image = image.normalize()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: generation_config.filter(|config| !config.is_empty()),
        };

        let body = self.post_generate_content(&model, &request).await?;

        Ok(if raw {
            TextOutput::Raw(body)
        } else {
            TextOutput::Text(extract::extract_text(&body))
        })
    }

    /// POST the request and decode the response body.
    ///
    /// The API key travels as the `key` query parameter; this placement is
    /// part of the remote API's contract.
    async fn post_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value> {
        let model = model.strip_prefix("models/").unwrap_or(model);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        );

        tracing::debug!("Sending generateContent request for model {}", model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|error| {
                    error
                        .pointer("/error/message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| "Unknown API error".to_string());

            return Err(Error::Api {
                message,
                status: status.as_u16(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
