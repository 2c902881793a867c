//! OpenAI Article Generator
//!
//! Implementation of `ArticleGeneratorPort` on the OpenAI chat completions
//! API, sending the hotel photo as an inline image.

mod adapter;
mod api_types;
mod config;
mod error;

pub use adapter::OpenAiArticleGenerator;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT, OpenAiConfig};
pub use error::OpenAiError;
