//! Translation providers

use async_trait::async_trait;

use crate::config::TranslateConfig;

use super::types::TranslationError;

/// Translator trait
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one text string from the configured source language to the
    /// configured target language.
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

/// Google's public web translation endpoint (`translate_a/single`).
///
/// The response is a nested JSON array whose first element lists translated
/// segments; the segments are concatenated into the output string.
pub struct GoogleWebTranslator {
    endpoint: String,
    source: String,
    target: String,
    client: reqwest::Client,
}

impl GoogleWebTranslator {
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            source: config.source.clone(),
            target: config.target.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Translator for GoogleWebTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source.as_str()),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslationError::Api(format!(
                "translation endpoint returned {}",
                response.status()
            )));
        }

        let value: serde_json::Value = response.json().await?;
        let segments = value
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                TranslationError::MalformedResponse("missing segment array".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(TranslationError::MalformedResponse(
                "no translated segments".to_string(),
            ));
        }

        Ok(translated)
    }
}
