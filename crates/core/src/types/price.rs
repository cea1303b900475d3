//! Integer price representation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in the smallest currency unit (euro cents).
///
/// All money in Copperline is integer arithmetic - a Raspberry Pi at EUR 30
/// is stored and transmitted as `3000`. Totals are sums of
/// `quantity x unit price` with no rounding anywhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// The amount in the smallest currency unit.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// The line total for `qty` units at this price.
    #[must_use]
    pub const fn line_total(self, qty: u32) -> Self {
        Self(self.0 * qty as i64)
    }

    /// Add another price to this one.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for Price {
    /// Formats as a euro amount, e.g. `EUR 30.00` is rendered as `€30.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20ac}{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let unit = Price::from_minor_units(1500);
        assert_eq!(unit.line_total(3), Price::from_minor_units(4500));
        assert_eq!(unit.line_total(0), Price::ZERO);
    }

    #[test]
    fn test_add() {
        let total = Price::from_minor_units(3000).add(Price::from_minor_units(100));
        assert_eq!(total.minor_units(), 3100);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_minor_units(3000).to_string(), "\u{20ac}30.00");
        assert_eq!(Price::from_minor_units(105).to_string(), "\u{20ac}1.05");
        assert_eq!(Price::ZERO.to_string(), "\u{20ac}0.00");
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::from_minor_units(3000);
        assert_eq!(serde_json::to_string(&price).unwrap(), "3000");

        let parsed: Price = serde_json::from_str("1500").unwrap();
        assert_eq!(parsed, Price::from_minor_units(1500));
    }
}
