//! Product catalog capability.
//!
//! The catalog is the external system of record for which products exist. This
//! crate defines the lookup boundary consumed by inventory validation, the
//! transport-failure error model, and the read-only record shape the external
//! catalog API returns. It makes no storage or HTTP assumptions; concrete
//! clients live behind the [`ProductCatalog`] trait.

pub mod lookup;
pub mod record;

pub use lookup::{CatalogError, InMemoryCatalog, ProductCatalog};
pub use record::{HazmatInfo, Measurement, ProductRecord};
