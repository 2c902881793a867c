//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to the
//! application layer.

mod controller;
mod error;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use error::{ApiError, INTERNAL_ERROR_DETAIL, INVALID_JSON_DETAIL};
pub use request::*;
pub use response::*;
