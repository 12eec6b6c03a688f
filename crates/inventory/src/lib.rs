//! Inventory rule-enforcement core.
//!
//! This crate contains the business rules guarding stock mutations: quantity
//! and invariant checks (pure, deterministic domain logic) and the
//! catalog-backed product-existence pre-condition. The stock operations
//! service wires the two together and the metered decorator reports through
//! the metrics capability.

pub mod existence;
pub mod service;
pub mod stock;
pub mod validate;

pub use existence::ProductExistenceValidator;
pub use service::{MeteredStockOperations, StockOperations, StockService};
pub use stock::StockLevel;
