//! Configuration faults raised by the domain registries.

use thiserror::Error;

/// A registry lookup missed.
///
/// Raised when the validator or the currency transformer is asked for a key it
/// was not built with. A correctly wired gateway never produces these; they
/// surface as internal errors, never as user-facing validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No validation strategy is registered for the field.
    #[error("No validation strategy for field: {field}")]
    UnknownField {
        /// Field name that was looked up.
        field: String,
    },

    /// No transformation command is registered for the currency.
    #[error("No transformation command for currency: {currency}")]
    UnsupportedCurrency {
        /// Currency code that was looked up.
        currency: String,
    },
}
