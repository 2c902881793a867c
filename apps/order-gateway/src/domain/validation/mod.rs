//! Order Validation
//!
//! Per-field validation strategies and the registry that dispatches to them.

pub mod strategy;
pub mod validator;

pub use strategy::{MAX_ORDER_PRICE, ValidationStrategy, parse_price, price_value};
pub use validator::{ValidationField, Validator};
