//! Value objects shared across the storefront domain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Store currency. Everything the backend serves is priced in rupees.
pub const STORE_CURRENCY: &str = "INR";

/// Monetary amount in a single currency.
///
/// Prices arrive from the backend as decimal amounts; cart and checkout
/// arithmetic stays inside `Money` so amounts in different currencies can
/// never be summed unnoticed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self { amount, currency: currency.to_string() }
    }

    /// Amount in the store currency.
    pub fn inr(amount: impl Into<Decimal>) -> Self {
        Self::new(amount.into(), STORE_CURRENCY)
    }

    pub fn zero(currency: &str) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch);
        }
        Ok(Money::new(self.amount + other.amount, &self.currency))
    }

    pub fn multiply(&self, qty: u32) -> Money {
        Money::new(self.amount * Decimal::from(qty), &self.currency)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero(STORE_CURRENCY)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

#[derive(Debug, Clone, Error)]
pub enum MoneyError {
    #[error("currency mismatch")]
    CurrencyMismatch,
}

/// SKU (Stock Keeping Unit) value object.
///
/// Normalized (trimmed, uppercased) on construction; deserialization goes
/// through the same validation so a bad backend payload is caught at the
/// boundary rather than deep in cart logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Result<Self, SkuError> {
        let value = value.into().trim().to_uppercase();
        if value.is_empty() {
            return Err(SkuError::Empty);
        }
        if value.len() > 50 {
            return Err(SkuError::TooLong);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Sku {
    type Error = SkuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sku::new(value)
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Error)]
pub enum SkuError {
    #[error("SKU is empty")]
    Empty,
    #[error("SKU exceeds 50 characters")]
    TooLong,
}
