//! Catalog lookup abstraction (mechanics only).

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use thiserror::Error;

use crate::record::ProductRecord;

/// Failure to answer a catalog lookup.
///
/// These are transport-level failures. `Ok(false)` from a lookup means the
/// catalog answered and the product is not registered; a `CatalogError` means
/// the catalog did not answer at all. Callers must never treat the two alike.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog could not be reached or returned a non-answer.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The lookup exceeded the client's deadline.
    #[error("catalog lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Catalog existence lookup.
///
/// One synchronous check per call; implementations decide transport, timeout
/// bounds, and authentication. Consumers hold this as `Arc<dyn ProductCatalog>`
/// so the boundary stays mockable.
pub trait ProductCatalog: Send + Sync {
    /// Whether `identifier` is registered in the catalog.
    fn exists(&self, identifier: &str) -> Result<bool, CatalogError>;

    /// Fetch the full catalog record, if registered.
    fn get(&self, identifier: &str) -> Result<Option<ProductRecord>, CatalogError>;
}

/// Map-backed catalog for tests and local wiring.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: RwLock<HashMap<String, ProductRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a product record.
    pub fn register(&self, record: ProductRecord) {
        if let Ok(mut records) = self.records.write() {
            records.insert(record.identifier.clone(), record);
        }
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn exists(&self, identifier: &str) -> Result<bool, CatalogError> {
        let records = self
            .records
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog store poisoned".to_string()))?;
        Ok(records.contains_key(identifier))
    }

    fn get(&self, identifier: &str) -> Result<Option<ProductRecord>, CatalogError> {
        let records = self
            .records
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog store poisoned".to_string()))?;
        Ok(records.get(identifier).cloned())
    }
}
