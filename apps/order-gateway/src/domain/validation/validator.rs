//! Validator registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::strategy::ValidationStrategy;
use crate::domain::shared::ConfigurationError;

/// Registry key: an order field (or field aspect) with its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationField {
    /// `name`, checked for English characters.
    Name,
    /// `capitalizedName`, the name checked for capitalization.
    CapitalizedName,
    /// `price`, checked as raw text.
    Price,
    /// `currency`.
    Currency,
}

impl ValidationField {
    /// Every field the standard registry covers, in evaluation order.
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::CapitalizedName,
        Self::Price,
        Self::Currency,
    ];

    /// Registry key string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CapitalizedName => "capitalizedName",
            Self::Price => "price",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationField {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownField {
                field: s.to_string(),
            })
    }
}

/// Registry mapping each field to its validation strategy.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Validator {
    strategies: HashMap<ValidationField, ValidationStrategy>,
}

impl Validator {
    /// Create a validator from an explicit strategy table.
    #[must_use]
    pub const fn new(strategies: HashMap<ValidationField, ValidationStrategy>) -> Self {
        Self { strategies }
    }

    /// Registry with the four order rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(HashMap::from([
            (ValidationField::Name, ValidationStrategy::NameFormat),
            (
                ValidationField::CapitalizedName,
                ValidationStrategy::NameCapitalization,
            ),
            (ValidationField::Price, ValidationStrategy::PriceBound),
            (
                ValidationField::Currency,
                ValidationStrategy::CurrencyWhitelist,
            ),
        ]))
    }

    /// Whether a strategy is registered for `field`.
    #[must_use]
    pub fn covers(&self, field: ValidationField) -> bool {
        self.strategies.contains_key(&field)
    }

    /// Run the strategy registered for `field` against `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownField`] when no strategy is
    /// registered for `field`.
    pub fn validate(&self, field: ValidationField, value: &str) -> Result<bool, ConfigurationError> {
        self.strategies
            .get(&field)
            .map(|strategy| strategy.validate(value))
            .ok_or_else(|| ConfigurationError::UnknownField {
                field: field.as_str().to_string(),
            })
    }

    /// Same as [`Validator::validate`], keyed by the field's string name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownField`] for a name outside the
    /// known field set or without a registered strategy.
    pub fn validate_named(&self, field: &str, value: &str) -> Result<bool, ConfigurationError> {
        self.validate(field.parse()?, value)
    }
}
