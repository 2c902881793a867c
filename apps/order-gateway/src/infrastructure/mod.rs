//! Infrastructure Layer
//!
//! Adapters connecting the application to the outside world:
//!
//! - [`http`]: Axum REST endpoints (driver adapter)
//! - [`openai`]: Chat completions client implementing `ArticleGeneratorPort`
//! - [`config`]: Environment-driven settings

pub mod config;
pub mod http;
pub mod openai;
