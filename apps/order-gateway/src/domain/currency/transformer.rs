//! Currency transformer registry.

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use super::code::Currency;
use super::command::CurrencyTransformCommand;
use crate::domain::shared::ConfigurationError;

/// Failure to convert a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// No command is registered for the currency.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The converted price does not fit in a `Decimal`.
    #[error("Converting {price} {currency} overflows")]
    Overflow {
        /// Price before conversion.
        price: Decimal,
        /// Source currency.
        currency: Currency,
    },
}

/// Registry mapping a source currency to its transformation command.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CurrencyTransformer {
    commands: HashMap<Currency, CurrencyTransformCommand>,
}

impl CurrencyTransformer {
    /// Create a transformer from an explicit command table.
    #[must_use]
    pub const fn new(commands: HashMap<Currency, CurrencyTransformCommand>) -> Self {
        Self { commands }
    }

    /// Registry with a command for every currency the whitelist accepts.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_commands([
            CurrencyTransformCommand::UsdToTwd,
            CurrencyTransformCommand::TwdToTwd,
        ])
    }

    /// Build a registry keyed by each command's source currency.
    pub fn from_commands(commands: impl IntoIterator<Item = CurrencyTransformCommand>) -> Self {
        Self::new(commands.into_iter().map(|c| (c.source(), c)).collect())
    }

    /// Whether a command is registered for `currency`.
    #[must_use]
    pub fn supports(&self, currency: Currency) -> bool {
        self.commands.contains_key(&currency)
    }

    /// Convert `price` from the currency named by `currency`.
    ///
    /// # Errors
    ///
    /// - [`TransformError::Configuration`] with
    ///   [`ConfigurationError::UnsupportedCurrency`] when the code is unknown
    ///   or has no registered command.
    /// - [`TransformError::Overflow`] when the result is out of range.
    pub fn transform(
        &self,
        price: Decimal,
        currency: &str,
    ) -> Result<(Decimal, Currency), TransformError> {
        let source: Currency = currency.parse()?;
        self.transform_from(price, source)
    }

    /// Convert `price` from an already-parsed currency.
    ///
    /// # Errors
    ///
    /// Same as [`Self::transform`].
    pub fn transform_from(
        &self,
        price: Decimal,
        source: Currency,
    ) -> Result<(Decimal, Currency), TransformError> {
        let command = self.commands.get(&source).ok_or_else(|| {
            ConfigurationError::UnsupportedCurrency {
                currency: source.code().to_string(),
            }
        })?;

        command.execute(price).ok_or(TransformError::Overflow {
            price,
            currency: source,
        })
    }
}
