//! Exact money arithmetic in integer minor units.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Monetary amount in smallest currency units (e.g. cents).
///
/// Wraps an unsigned integer so negative prices are unrepresentable and
/// aggregate totals never touch floating point.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    /// Extend a unit price over a non-negative quantity.
    ///
    /// Saturates instead of wrapping; callers guarantee `quantity >= 0`.
    pub fn extend(&self, quantity: i64) -> Money {
        let qty = u64::try_from(quantity).unwrap_or(0);
        Money(self.0.saturating_mul(qty))
    }

    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = InventoryError;

    /// Parse a decimal amount like `"29.99"`, `"12"`, or `"0.5"`.
    ///
    /// At most two fraction digits; negative amounts are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(InventoryError::validation("price cannot be empty"));
        }
        if text.starts_with('-') {
            return Err(InventoryError::validation("price cannot be negative"));
        }

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InventoryError::validation(format!("malformed price '{text}'")));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InventoryError::validation(format!(
                "price '{text}' must have at most two decimal places"
            )));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| InventoryError::validation(format!("price '{text}' is out of range")))?;
        let cents = match frac.len() {
            0 => 0,
            1 => {
                frac.parse::<u64>().map_err(|_| {
                    InventoryError::validation(format!("malformed price '{text}'"))
                })? * 10
            }
            _ => frac.parse::<u64>().map_err(|_| {
                InventoryError::validation(format!("malformed price '{text}'"))
            })?,
        };

        whole
            .checked_mul(100)
            .and_then(|units| units.checked_add(cents))
            .map(Money)
            .ok_or_else(|| InventoryError::validation(format!("price '{text}' is out of range")))
    }
}
