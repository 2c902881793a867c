//! Order Service
//!
//! Turns a raw order into a normalized one: validate every field in a fixed
//! order, stop at the first rejection, then convert the price to TWD.

use crate::domain::currency::CurrencyTransformer;
use crate::domain::order::{OrderError, OrderInput, OrderOutput, ValidationError};
use crate::domain::validation::{ValidationField, Validator, parse_price};

/// Orchestrates the validator and the currency transformer.
#[derive(Debug, Clone)]
pub struct OrderService {
    validator: Validator,
    transformer: CurrencyTransformer,
}

impl OrderService {
    /// Create a service over the given registries.
    #[must_use]
    pub const fn new(validator: Validator, transformer: CurrencyTransformer) -> Self {
        Self {
            validator,
            transformer,
        }
    }

    /// Service wired with the standard registries.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Validator::standard(), CurrencyTransformer::standard())
    }

    /// Validate `order` and normalize its price.
    ///
    /// # Errors
    ///
    /// - [`OrderError::Validation`] for the first rule the order breaks.
    /// - [`OrderError::PriceOutOfRange`] if the accepted price does not fit in
    ///   a `Decimal` before or after conversion.
    /// - [`OrderError::Configuration`] if the registries miss a field or
    ///   currency they should cover.
    pub fn create_order(&self, order: OrderInput) -> Result<OrderOutput, OrderError> {
        self.validate_order(&order)?;

        let price = parse_price(&order.price).ok_or(OrderError::PriceOutOfRange)?;
        let (price, currency) = self
            .transformer
            .transform(price, &order.currency)
            .inspect_err(|e| {
                tracing::warn!(order_id = %order.id, error = %e, "Price conversion failed");
            })?;

        tracing::info!(
            order_id = %order.id,
            source_currency = %order.currency,
            %price,
            %currency,
            "Order normalized"
        );

        Ok(OrderOutput {
            id: order.id,
            name: order.name,
            address: order.address,
            price,
            currency,
        })
    }

    fn validate_order(&self, order: &OrderInput) -> Result<(), OrderError> {
        let checks = [
            (ValidationField::Name, order.name.as_str()),
            (ValidationField::CapitalizedName, order.name.as_str()),
            (ValidationField::Price, order.price.as_str()),
            (ValidationField::Currency, order.currency.as_str()),
        ];

        for (field, value) in checks {
            if !self.validator.validate(field, value)? {
                let error = ValidationError::for_field(field);
                tracing::debug!(order_id = %order.id, %field, %error, "Order rejected");
                return Err(error.into());
            }
        }

        Ok(())
    }
}
