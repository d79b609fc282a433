//! Translation boundary
//!
//! Translates recognized text from a fixed source language to a fixed target
//! language. Failures never abort the batch: [`translate_or_original`] is the
//! single recovery point in the whole pipeline, substituting the original
//! text when the backend fails.

mod provider;
mod types;

pub use provider::{GoogleWebTranslator, Translator};
pub use types::TranslationError;

/// Translate `text`, falling back to the original on any failure.
pub async fn translate_or_original(translator: &dyn Translator, text: &str) -> String {
    match translator.translate(text).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!("Translation failed, keeping original text: {}", e);
            text.to_string()
        }
    }
}
