//! Currency transformation commands.
//!
//! One command per source currency. Every command lands in TWD.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::code::Currency;

/// Fixed USD → TWD conversion rate.
///
/// Static: there is no live FX lookup behind it.
pub const USD_TO_TWD_RATE: Decimal = dec!(31);

/// A pure price conversion from one source currency into TWD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyTransformCommand {
    /// Multiply by [`USD_TO_TWD_RATE`].
    UsdToTwd,
    /// Identity.
    TwdToTwd,
}

impl CurrencyTransformCommand {
    /// Currency this command accepts.
    #[must_use]
    pub const fn source(&self) -> Currency {
        match self {
            Self::UsdToTwd => Currency::Usd,
            Self::TwdToTwd => Currency::Twd,
        }
    }

    /// Currency this command produces.
    #[must_use]
    pub const fn target(&self) -> Currency {
        Currency::Twd
    }

    /// Convert `price` into the target currency.
    ///
    /// `None` when the converted price does not fit in a [`Decimal`].
    #[must_use]
    pub fn execute(&self, price: Decimal) -> Option<(Decimal, Currency)> {
        let converted = match self {
            Self::UsdToTwd => price.checked_mul(USD_TO_TWD_RATE)?,
            Self::TwdToTwd => price,
        };
        Some((converted, self.target()))
    }
}
