//! Translation error types

use thiserror::Error;

/// Errors raised by translation backends.
///
/// Callers other than the fallback wrapper must not catch these; recovery
/// happens in exactly one place.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Empty input")]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
