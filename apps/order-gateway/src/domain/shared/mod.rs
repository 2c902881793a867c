//! Shared Domain Types
//!
//! Errors shared across bounded contexts.

pub mod errors;

pub use errors::ConfigurationError;
