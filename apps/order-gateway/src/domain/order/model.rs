//! Order input and output models.

use rust_decimal::Decimal;

use crate::domain::currency::Currency;

/// Delivery address. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// City.
    pub city: String,
    /// District.
    pub district: String,
    /// Street.
    pub street: String,
}

/// An order as submitted, before any validation.
///
/// Price and currency are still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInput {
    /// Caller-assigned order identifier.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Delivery address.
    pub address: Address,
    /// Price as sent, e.g. "1000".
    pub price: String,
    /// Currency code as sent, e.g. "USD".
    pub currency: String,
}

/// A validated order with its price normalized to TWD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOutput {
    /// Caller-assigned order identifier.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Delivery address.
    pub address: Address,
    /// Converted price.
    pub price: Decimal,
    /// Currency of `price`.
    pub currency: Currency,
}
