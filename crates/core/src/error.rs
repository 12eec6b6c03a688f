//! Inventory fault model.

use thiserror::Error;

/// Result type used across the inventory domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level fault.
///
/// Keep this focused on deterministic rule rejections (quantities, invariants,
/// catalog pre-conditions). Every variant carries structured context so callers
/// can inspect a fault without parsing its message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A proposed quantity violates the constraints of an operation.
    #[error("invalid quantity {quantity} for operation '{operation}': {detail}", detail = .reason.as_deref().unwrap_or("constraint violated"))]
    InvalidQuantity {
        operation: String,
        quantity: i64,
        reason: Option<String>,
    },

    /// The product identifier is not registered in the external catalog.
    #[error("product '{identifier}' not found in catalog: register the product in the catalog before performing inventory operations")]
    ProductNotInCatalog { identifier: String },

    /// A stock-level invariant no longer holds for the proposed state.
    #[error("stock invariant '{rule}' violated: on_hand={on_hand}, allocated={allocated}")]
    InvariantViolation {
        rule: String,
        on_hand: i64,
        allocated: i64,
    },

    /// The catalog could not answer the lookup (transport failure).
    ///
    /// Distinct from [`InventoryError::ProductNotInCatalog`]: an unavailable
    /// catalog says nothing about whether the product exists.
    #[error("catalog lookup failed: {0}")]
    CatalogUnavailable(String),

    /// No stock level is recorded for the product (domain-level).
    #[error("no stock level recorded for product '{identifier}'")]
    StockLevelNotFound { identifier: String },

    /// A product identifier was invalid (e.g. empty key).
    #[error("invalid product identifier: {0}")]
    InvalidId(String),
}

impl InventoryError {
    pub fn invalid_quantity(operation: impl Into<String>, quantity: i64) -> Self {
        Self::InvalidQuantity {
            operation: operation.into(),
            quantity,
            reason: None,
        }
    }

    pub fn invalid_quantity_because(
        operation: impl Into<String>,
        quantity: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidQuantity {
            operation: operation.into(),
            quantity,
            reason: Some(reason.into()),
        }
    }

    pub fn not_in_catalog(identifier: impl Into<String>) -> Self {
        Self::ProductNotInCatalog {
            identifier: identifier.into(),
        }
    }

    pub fn invariant(rule: impl Into<String>, on_hand: i64, allocated: i64) -> Self {
        Self::InvariantViolation {
            rule: rule.into(),
            on_hand,
            allocated,
        }
    }

    pub fn catalog_unavailable(msg: impl Into<String>) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    pub fn stock_level_not_found(identifier: impl Into<String>) -> Self {
        Self::StockLevelNotFound {
            identifier: identifier.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
