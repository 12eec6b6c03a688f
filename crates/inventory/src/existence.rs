//! Catalog-backed product-existence pre-condition.

use std::sync::Arc;

use stockpile_catalog::ProductCatalog;
use stockpile_core::{InventoryError, InventoryResult, ValidationConfig};

/// Guarded pre-condition: the product must be registered in the catalog
/// before inventory operations proceed.
///
/// The catalog is an injected capability so the boundary stays mockable. When
/// validation is disabled by configuration the catalog is never consulted.
/// No caching, no retry: one synchronous existence check per call.
pub struct ProductExistenceValidator {
    catalog: Arc<dyn ProductCatalog>,
    config: ValidationConfig,
}

impl ProductExistenceValidator {
    pub fn new(catalog: Arc<dyn ProductCatalog>, config: ValidationConfig) -> Self {
        Self { catalog, config }
    }

    /// Whether catalog-existence checks are enforced.
    pub fn is_validation_enabled(&self) -> bool {
        self.config.catalog_check_enabled()
    }

    /// Check that `identifier` is registered in the catalog.
    ///
    /// Accepts arbitrary input (including an empty identifier) and lets the
    /// catalog answer for itself; a negative answer becomes a
    /// [`InventoryError::ProductNotInCatalog`] fault carrying the identifier.
    /// A catalog transport failure surfaces as
    /// [`InventoryError::CatalogUnavailable`], never as not-found.
    pub fn validate_product_exists(&self, identifier: &str) -> InventoryResult<()> {
        if !self.is_validation_enabled() {
            return Ok(());
        }

        match self.catalog.exists(identifier) {
            Ok(true) => Ok(()),
            Ok(false) => Err(InventoryError::not_in_catalog(identifier)),
            Err(err) => Err(InventoryError::catalog_unavailable(err.to_string())),
        }
    }
}

impl core::fmt::Debug for ProductExistenceValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductExistenceValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
