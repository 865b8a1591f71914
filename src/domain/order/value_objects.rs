use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Address {
    pub city: String,
    pub district: String,
    pub street: String,
}

/// An order that passed schema validation.
///
/// `currency` stays the submitted string until business validation, so an
/// unsupported code is still representable here and gets rejected later.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    pub name: String,
    pub address: Address,
    pub price: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Twd,
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Twd => "TWD",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedCurrency(pub String);

impl FromStr for Currency {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TWD" => Ok(Currency::Twd),
            "USD" => Ok(Currency::Usd),
            other => Err(UnsupportedCurrency(other.to_string())),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
