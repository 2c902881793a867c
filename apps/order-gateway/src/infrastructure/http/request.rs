//! HTTP request DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::ports::ArticleRequest;
use crate::domain::order::{Address, OrderInput};

/// Address as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBody {
    /// City.
    pub city: String,
    /// District.
    pub district: String,
    /// Street.
    pub street: String,
}

impl From<AddressBody> for Address {
    fn from(body: AddressBody) -> Self {
        Self {
            city: body.city,
            district: body.district,
            street: body.street,
        }
    }
}

impl From<Address> for AddressBody {
    fn from(address: Address) -> Self {
        Self {
            city: address.city,
            district: address.district,
            street: address.street,
        }
    }
}

/// Request to create an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Order ID.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Delivery address.
    pub address: AddressBody,
    /// Price as text.
    pub price: String,
    /// Currency code.
    pub currency: String,
}

impl From<CreateOrderRequest> for OrderInput {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            address: request.address.into(),
            price: request.price,
            currency: request.currency,
        }
    }
}

/// Hotel rating, accepted as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    /// Numeric rating, e.g. `4.5`.
    Number(serde_json::Number),
    /// Textual rating, e.g. `"4.5/5"`.
    Text(String),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Request to generate a travel article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateArticleRequest {
    /// Hotel name.
    pub hotel_name: String,
    /// Hotel description.
    pub description: String,
    /// Guest reviews.
    #[serde(default)]
    pub reviews: Vec<String>,
    /// Hotel rating.
    pub rating: Rating,
    /// Base64-encoded JPEG photo.
    pub photo: String,
}

impl From<GenerateArticleRequest> for ArticleRequest {
    fn from(request: GenerateArticleRequest) -> Self {
        Self {
            hotel_name: request.hotel_name,
            description: request.description,
            reviews: request.reviews,
            rating: request.rating.to_string(),
            photo: request.photo,
        }
    }
}
