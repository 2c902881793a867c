//! Field validation strategies.
//!
//! Each strategy is a pure predicate over the raw string the caller sent.
//! Strategies never fail: malformed input is simply not acceptable.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::domain::currency::Currency;

/// Inclusive upper bound for an order price, in the order's own currency.
pub const MAX_ORDER_PRICE: f64 = 2000.0;

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStrategy {
    /// English letters, whitespace and apostrophes only.
    NameFormat,
    /// Every word starts with an uppercase letter followed by lowercase letters.
    NameCapitalization,
    /// Numeric and not above [`MAX_ORDER_PRICE`].
    PriceBound,
    /// One of the supported currency codes, matched exactly.
    CurrencyWhitelist,
}

impl ValidationStrategy {
    /// Whether `value` satisfies this rule.
    #[must_use]
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Self::NameFormat => is_english_name(value),
            Self::NameCapitalization => is_title_case(value),
            Self::PriceBound => price_value(value).is_some_and(|price| price <= MAX_ORDER_PRICE),
            Self::CurrencyWhitelist => Currency::from_str(value).is_ok(),
        }
    }
}

/// Numeric value of a price, for the bound check.
///
/// Surrounding whitespace is ignored; plain and scientific notation are both
/// accepted. `None` for anything that is not a finite number. Magnitude is not
/// limited, so `-1e30` is a price.
#[must_use]
pub fn price_value(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| Decimal::from_str(trimmed).ok().as_ref().and_then(ToPrimitive::to_f64))
        .filter(|price| price.is_finite())
}

/// Parse a price into a [`Decimal`] for conversion.
///
/// Accepts what [`price_value`] accepts, rounded to `Decimal` precision.
/// `None` when the value is not a finite number or lies outside the
/// `Decimal` range (about ±7.9e28).
#[must_use]
pub fn parse_price(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| price_value(trimmed).and_then(Decimal::from_f64))
}

#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn is_english_name(value: &str) -> bool {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

    NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z\s']+$").expect("name regex is valid"))
        .is_match(value)
}

/// Title-case check.
///
/// An uppercase letter may only follow an uncased character, a lowercase
/// letter may only follow a cased one, and at least one cased character must
/// be present. Apostrophes and whitespace are uncased, so "O'Brien" passes.
fn is_title_case(value: &str) -> bool {
    let mut has_cased = false;
    let mut previous_cased = false;

    for c in value.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else {
            previous_cased = false;
        }
    }

    has_cased
}
