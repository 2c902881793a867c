//! Currency Normalization
//!
//! Converts order prices into TWD through a registry of per-currency commands.

pub mod code;
pub mod command;
pub mod transformer;

pub use code::Currency;
pub use command::{CurrencyTransformCommand, USD_TO_TWD_RATE};
pub use transformer::{CurrencyTransformer, TransformError};
