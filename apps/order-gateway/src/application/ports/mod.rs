//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach external systems.

mod article_generator_port;

pub use article_generator_port::{ArticleError, ArticleGeneratorPort, ArticleRequest};
