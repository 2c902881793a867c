//! Configuration Module
//!
//! Environment-driven configuration for the gateway.

mod settings;

pub use settings::{ConfigError, CorsSettings, DEFAULT_CORS_ORIGIN, GatewayConfig, ServerSettings};
