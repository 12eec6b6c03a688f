//! Strongly-typed product identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a product (SKU-style string key).
///
/// Stock levels are keyed by this identifier. Construction rejects empty (or
/// whitespace-only) keys; lookup paths that must accept arbitrary caller input
/// take `&str` instead and let the catalog answer for itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier from a non-empty key.
    pub fn new(id: impl Into<String>) -> Result<Self, InventoryError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InventoryError::invalid_id(
                "product identifier cannot be empty",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sku_style_keys() {
        let id = ProductId::new("TEST-SKU-001").unwrap();
        assert_eq!(id.as_str(), "TEST-SKU-001");
        assert_eq!(id.to_string(), "TEST-SKU-001");
    }

    #[test]
    fn rejects_empty_and_whitespace_keys() {
        assert!(matches!(
            ProductId::new(""),
            Err(InventoryError::InvalidId(_))
        ));
        assert!(matches!(
            ProductId::new("   "),
            Err(InventoryError::InvalidId(_))
        ));
    }

    #[test]
    fn parses_from_str() {
        let id: ProductId = "WIDGET-9".parse().unwrap();
        assert_eq!(id.as_str(), "WIDGET-9");
    }
}
