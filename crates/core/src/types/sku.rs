//! Stock keeping unit identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Sku`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SkuError {
    /// The input string is empty.
    #[error("sku cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("sku must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("sku cannot contain whitespace")]
    ContainsWhitespace,
}

/// A stock keeping unit - the unique string key of a product.
///
/// SKUs are opaque to every service except the catalog, which enforces shape
/// at creation time via [`Sku::parse`]. Deserialization is transparent and
/// does not validate, so carts can carry whatever key the caller stored.
///
/// ## Constraints (enforced by `parse`)
///
/// - Length: 1-64 characters
/// - No whitespace
///
/// ## Examples
///
/// ```
/// use copperline_core::Sku;
///
/// assert!(Sku::parse("SKU1").is_ok());
/// assert!(Sku::parse("raspberry-pi-4").is_ok());
///
/// assert!(Sku::parse("").is_err());
/// assert!(Sku::parse("has spaces").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Maximum length of a SKU.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `Sku` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters, or
    /// contains whitespace.
    pub fn parse(s: &str) -> Result<Self, SkuError> {
        if s.is_empty() {
            return Err(SkuError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SkuError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(SkuError::ContainsWhitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Sku` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Sku {
    type Err = SkuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Sku {
    /// Wrap a stored key without validation.
    ///
    /// Used when reading back keys the store already holds; new SKUs go
    /// through [`Sku::parse`].
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_skus() {
        assert!(Sku::parse("SKU1").is_ok());
        assert!(Sku::parse("raspberry-pi-4").is_ok());
        assert!(Sku::parse("a").is_ok());
        assert!(Sku::parse(&"x".repeat(64)).is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Sku::parse(""), Err(SkuError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Sku::parse(&"x".repeat(65)),
            Err(SkuError::TooLong { max: 64 })
        ));
    }

    #[test]
    fn test_parse_whitespace() {
        assert!(matches!(
            Sku::parse("has spaces"),
            Err(SkuError::ContainsWhitespace)
        ));
        assert!(matches!(
            Sku::parse("tab\there"),
            Err(SkuError::ContainsWhitespace)
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let sku = Sku::parse("SKU1").unwrap();
        let json = serde_json::to_string(&sku).unwrap();
        assert_eq!(json, "\"SKU1\"");

        // Deserialization is transparent and does not validate
        let weird: Sku = serde_json::from_str("\"has spaces\"").unwrap();
        assert_eq!(weird.as_str(), "has spaces");
    }

    #[test]
    fn test_display() {
        let sku = Sku::parse("SKU1").unwrap();
        assert_eq!(format!("{sku}"), "SKU1");
    }
}
