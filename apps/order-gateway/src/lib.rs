// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::panic,
        clippy::needless_pass_by_value
    )
)]

//! Order Gateway - Rust Core Library
//!
//! HTTP gateway that validates and normalizes orders and generates hotel
//! promotion articles through a multimodal language model.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Business rules with no infrastructure dependencies
//!   - `validation`: Per-field strategies and the `Validator` registry
//!   - `currency`: Conversion commands and the `CurrencyTransformer` registry
//!   - `order`: Input/output order models and validation errors
//!
//! - **Application**: Orchestration
//!   - `services`: `OrderService` (validate, then convert to TWD)
//!   - `ports`: `ArticleGeneratorPort`
//!   - `use_cases`: `GenerateArticleUseCase`
//!
//! - **Infrastructure**: Adapters
//!   - `http`: Axum router, request/response DTOs, error mapping
//!   - `openai`: Chat completions adapter
//!   - `config`: Environment-driven settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Services, use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::currency::{Currency, CurrencyTransformCommand, CurrencyTransformer, TransformError};
pub use domain::order::{Address, OrderError, OrderInput, OrderOutput, ValidationError};
pub use domain::shared::ConfigurationError;
pub use domain::validation::{ValidationField, ValidationStrategy, Validator};

// Application re-exports
pub use application::ports::{ArticleError, ArticleGeneratorPort, ArticleRequest};
pub use application::services::OrderService;
pub use application::use_cases::GenerateArticleUseCase;

// Infrastructure re-exports
pub use infrastructure::config::{ConfigError, GatewayConfig};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::openai::{OpenAiArticleGenerator, OpenAiConfig, OpenAiError};
