//! Currency value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::shared::ConfigurationError;

/// A currency the gateway knows how to handle.
///
/// Codes are matched exactly: "usd" is not USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// New Taiwan dollar. The canonical currency of every processed order.
    #[serde(rename = "TWD")]
    Twd,
    /// United States dollar.
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Self; 2] = [Self::Twd, Self::Usd];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Twd => "TWD",
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| ConfigurationError::UnsupportedCurrency {
                currency: s.to_string(),
            })
    }
}
