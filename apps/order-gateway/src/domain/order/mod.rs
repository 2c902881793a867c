//! Order Context
//!
//! Input and output order models and the errors raised while normalizing them.

pub mod errors;
pub mod model;

pub use errors::{OrderError, ValidationError};
pub use model::{Address, OrderInput, OrderOutput};
