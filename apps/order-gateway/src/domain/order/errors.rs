//! Order creation errors.

use thiserror::Error;

use crate::domain::currency::TransformError;
use crate::domain::shared::ConfigurationError;
use crate::domain::validation::ValidationField;

/// An order field was rejected.
///
/// `Display` is the exact message returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name has characters outside English letters, spaces and apostrophes.
    #[error("Name contains non-English characters")]
    NonEnglishName,

    /// The name is not title case.
    #[error("Name is not capitalized")]
    NameNotCapitalized,

    /// The price is not a number, or is above 2000.
    #[error("Price is over 2000")]
    PriceOverLimit,

    /// The currency is not a supported code.
    #[error("Currency format is wrong")]
    InvalidCurrency,
}

impl ValidationError {
    /// Error reported when the rule for `field` rejects its value.
    #[must_use]
    pub const fn for_field(field: ValidationField) -> Self {
        match field {
            ValidationField::Name => Self::NonEnglishName,
            ValidationField::CapitalizedName => Self::NameNotCapitalized,
            ValidationField::Price => Self::PriceOverLimit,
            ValidationField::Currency => Self::InvalidCurrency,
        }
    }
}

/// Failure to turn an input order into a normalized one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// User input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The price passed validation but cannot be represented once converted.
    #[error("Price is out of range")]
    PriceOutOfRange,

    /// The registries are wired inconsistently.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl From<TransformError> for OrderError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Configuration(e) => Self::Configuration(e),
            TransformError::Overflow { .. } => Self::PriceOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_caller_facing() {
        assert_eq!(
            ValidationError::NonEnglishName.to_string(),
            "Name contains non-English characters"
        );
        assert_eq!(
            ValidationError::NameNotCapitalized.to_string(),
            "Name is not capitalized"
        );
        assert_eq!(
            ValidationError::PriceOverLimit.to_string(),
            "Price is over 2000"
        );
        assert_eq!(
            ValidationError::InvalidCurrency.to_string(),
            "Currency format is wrong"
        );
    }

    #[test]
    fn each_field_has_its_own_error() {
        let errors: Vec<_> = ValidationField::ALL
            .into_iter()
            .map(ValidationError::for_field)
            .collect();
        assert_eq!(
            errors,
            vec![
                ValidationError::NonEnglishName,
                ValidationError::NameNotCapitalized,
                ValidationError::PriceOverLimit,
                ValidationError::InvalidCurrency,
            ]
        );
    }

    #[test]
    fn overflow_becomes_out_of_range() {
        let err: OrderError = TransformError::Overflow {
            price: rust_decimal::Decimal::MIN,
            currency: crate::domain::currency::Currency::Usd,
        }
        .into();
        assert_eq!(err, OrderError::PriceOutOfRange);
        assert_eq!(err.to_string(), "Price is out of range");
    }

    #[test]
    fn order_error_is_transparent() {
        let err: OrderError = ValidationError::PriceOverLimit.into();
        assert_eq!(err.to_string(), "Price is over 2000");
    }
}
