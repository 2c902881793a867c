//! OpenAI-specific error types.

use thiserror::Error;

use crate::application::ports::ArticleError;

/// Errors from the OpenAI adapter.
#[derive(Debug, Error, Clone)]
pub enum OpenAiError {
    /// HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(String),

    /// No API key configured.
    #[error("API key is not configured")]
    MissingApiKey,

    /// Request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Response parsed but carried no completion text.
    #[error("Response contained no completion")]
    EmptyCompletion,
}

impl From<OpenAiError> for ArticleError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::MissingApiKey => Self::MissingCredentials,
            OpenAiError::Http(message) | OpenAiError::Network(message) => {
                Self::ConnectionError { message }
            }
            OpenAiError::Api { status, message } => Self::ProviderError { status, message },
            OpenAiError::JsonParse(message) => Self::InvalidResponse { message },
            OpenAiError::EmptyCompletion => Self::InvalidResponse {
                message: "no completion in response".to_string(),
            },
        }
    }
}
