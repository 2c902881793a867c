//! Application Services
//!
//! Long-lived orchestrators shared across requests.

mod order_service;

pub use order_service::OrderService;
