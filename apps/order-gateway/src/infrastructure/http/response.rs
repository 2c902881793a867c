//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::currency::Currency;
use crate::domain::order::OrderOutput;

use super::request::AddressBody;

/// A normalized order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Order ID.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Delivery address.
    pub address: AddressBody,
    /// Converted price, as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Currency of `price`.
    pub currency: Currency,
}

impl From<OrderOutput> for OrderResponse {
    fn from(order: OrderOutput) -> Self {
        Self {
            id: order.id,
            name: order.name,
            address: order.address.into(),
            price: order.price,
            currency: order.currency,
        }
    }
}

/// A generated article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    /// Article text.
    pub article: String,
}

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub detail: String,
}

/// Greeting body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Greeting.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
