//! Domain Layer
//!
//! Business rules with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`order`]: Order models and validation errors
//! - [`validation`]: Per-field validation strategies and their registry
//! - [`currency`]: Currency codes, conversion commands and their registry

pub mod currency;
pub mod order;
pub mod shared;
pub mod validation;
