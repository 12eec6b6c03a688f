//! Stock operations: control flow and metrics reporting.
//!
//! A mutation runs the product-existence check first (when enabled), then the
//! quantity change, which the stock level validates before commit. [`MeteredStockOperations`] decorates any
//! implementation with fire-and-forget metrics.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use stockpile_catalog::ProductCatalog;
use stockpile_core::{InventoryError, InventoryResult, ProductId, ValidationConfig};
use stockpile_observability::{Counter, MetricsSink, TimerSpan};

use crate::existence::ProductExistenceValidator;
use crate::stock::StockLevel;
use crate::validate;

/// Inventory-mutating operations plus the stock-level query.
///
/// Mutations return the post-commit stock level snapshot.
pub trait StockOperations: Send + Sync {
    fn receive(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel>;
    fn allocate(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel>;
    fn deallocate(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel>;
    fn pick(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel>;
    fn adjust(&self, product_id: &ProductId, delta: i64) -> InventoryResult<StockLevel>;
    fn stock_level(&self, product_id: &ProductId) -> InventoryResult<StockLevel>;
}

/// In-process stock operations over an in-memory level store.
///
/// The store is disposable state for local wiring and tests; durable storage
/// is a collaborator outside this core. Shareable behind `Arc` across threads.
pub struct StockService {
    existence: ProductExistenceValidator,
    levels: RwLock<HashMap<ProductId, StockLevel>>,
}

impl StockService {
    pub fn new(catalog: Arc<dyn ProductCatalog>, config: ValidationConfig) -> Self {
        Self {
            existence: ProductExistenceValidator::new(catalog, config),
            levels: RwLock::new(HashMap::new()),
        }
    }

    pub fn existence_validator(&self) -> &ProductExistenceValidator {
        &self.existence
    }

    /// Run a validated mutation against an existing stock level.
    fn mutate<F>(&self, product_id: &ProductId, apply: F) -> InventoryResult<StockLevel>
    where
        F: FnOnce(&mut StockLevel) -> InventoryResult<()>,
    {
        self.existence.validate_product_exists(product_id.as_str())?;

        let mut levels = self
            .levels
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let level = levels
            .get_mut(product_id)
            .ok_or_else(|| InventoryError::stock_level_not_found(product_id.as_str()))?;
        apply(level)?;
        Ok(level.clone())
    }
}

impl StockOperations for StockService {
    fn receive(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        self.existence.validate_product_exists(product_id.as_str())?;
        validate::ensure_positive_quantity("receipt", quantity)?;

        let mut levels = self
            .levels
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // First receipt bootstraps the level.
        let level = levels
            .entry(product_id.clone())
            .or_insert_with(|| StockLevel::empty(product_id.clone()));
        level.receive(quantity)?;
        tracing::debug!(product = %product_id, quantity, "stock received");
        Ok(level.clone())
    }

    fn allocate(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        let level = self.mutate(product_id, |level| level.allocate(quantity))?;
        tracing::debug!(product = %product_id, quantity, "stock allocated");
        Ok(level)
    }

    fn deallocate(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        let level = self.mutate(product_id, |level| level.deallocate(quantity))?;
        tracing::debug!(product = %product_id, quantity, "stock deallocated");
        Ok(level)
    }

    fn pick(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        let level = self.mutate(product_id, |level| level.pick(quantity))?;
        tracing::debug!(product = %product_id, quantity, "stock picked");
        Ok(level)
    }

    fn adjust(&self, product_id: &ProductId, delta: i64) -> InventoryResult<StockLevel> {
        let level = self.mutate(product_id, |level| level.adjust(delta))?;
        tracing::debug!(product = %product_id, delta, "stock adjusted");
        Ok(level)
    }

    fn stock_level(&self, product_id: &ProductId) -> InventoryResult<StockLevel> {
        let levels = self
            .levels
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        levels
            .get(product_id)
            .cloned()
            .ok_or_else(|| InventoryError::stock_level_not_found(product_id.as_str()))
    }
}

impl core::fmt::Debug for StockService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StockService")
            .field("existence", &self.existence)
            .finish_non_exhaustive()
    }
}

/// Metrics-reporting decorator for any [`StockOperations`] implementation.
///
/// Records a timer span around every call (success or failure) and increments
/// the operation's counter on success only; rejected mutations leave the
/// counters untouched. Sink results are never consumed.
pub struct MeteredStockOperations<S> {
    inner: S,
    metrics: Arc<dyn MetricsSink>,
}

impl<S: StockOperations> MeteredStockOperations<S> {
    pub fn new(inner: S, metrics: Arc<dyn MetricsSink>) -> Self {
        Self { inner, metrics }
    }

    fn timed<T>(
        &self,
        span: TimerSpan,
        counter: Counter,
        call: impl FnOnce() -> InventoryResult<T>,
    ) -> InventoryResult<T> {
        let started = Instant::now();
        let result = call();
        self.metrics.record_duration(span, started.elapsed());
        if result.is_ok() {
            self.metrics.increment(counter);
        }
        result
    }
}

impl<S: StockOperations> StockOperations for MeteredStockOperations<S> {
    fn receive(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        self.timed(TimerSpan::StockOperation, Counter::Receipt, || {
            self.inner.receive(product_id, quantity)
        })
    }

    fn allocate(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        self.timed(TimerSpan::StockOperation, Counter::Allocation, || {
            self.inner.allocate(product_id, quantity)
        })
    }

    fn deallocate(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        self.timed(TimerSpan::StockOperation, Counter::Deallocation, || {
            self.inner.deallocate(product_id, quantity)
        })
    }

    fn pick(&self, product_id: &ProductId, quantity: i64) -> InventoryResult<StockLevel> {
        self.timed(TimerSpan::StockOperation, Counter::Pick, || {
            self.inner.pick(product_id, quantity)
        })
    }

    fn adjust(&self, product_id: &ProductId, delta: i64) -> InventoryResult<StockLevel> {
        self.timed(TimerSpan::StockOperation, Counter::Adjustment, || {
            self.inner.adjust(product_id, delta)
        })
    }

    fn stock_level(&self, product_id: &ProductId) -> InventoryResult<StockLevel> {
        self.timed(TimerSpan::Query, Counter::StockLevelQuery, || {
            self.inner.stock_level(product_id)
        })
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for MeteredStockOperations<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MeteredStockOperations")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use stockpile_catalog::{InMemoryCatalog, ProductRecord};

    fn test_product_id() -> ProductId {
        ProductId::new("TEST-SKU-001").unwrap()
    }

    fn open_service() -> StockService {
        StockService::new(Arc::new(InMemoryCatalog::new()), ValidationConfig::disabled())
    }

    fn catalog_with(identifiers: &[&str]) -> Arc<InMemoryCatalog> {
        let catalog = Arc::new(InMemoryCatalog::new());
        for id in identifiers {
            catalog.register(ProductRecord::named(*id, "Test Widget"));
        }
        catalog
    }

    #[test]
    fn receive_bootstraps_and_accumulates_stock() {
        let service = open_service();
        let id = test_product_id();

        let level = service.receive(&id, 10).unwrap();
        assert_eq!(level.quantity_on_hand(), 10);

        let level = service.receive(&id, 5).unwrap();
        assert_eq!(level.quantity_on_hand(), 15);
    }

    #[test]
    fn full_stock_lifecycle() {
        let service = open_service();
        let id = test_product_id();

        service.receive(&id, 10).unwrap();
        service.allocate(&id, 4).unwrap();
        let level = service.pick(&id, 2).unwrap();
        assert_eq!(level.quantity_on_hand(), 8);
        assert_eq!(level.quantity_allocated(), 2);

        let level = service.deallocate(&id, 2).unwrap();
        assert_eq!(level.quantity_allocated(), 0);

        let level = service.adjust(&id, -3).unwrap();
        assert_eq!(level.quantity_on_hand(), 5);

        let queried = service.stock_level(&id).unwrap();
        assert_eq!(queried, level);
    }

    #[test]
    fn over_allocation_is_rejected_and_state_preserved() {
        let service = open_service();
        let id = test_product_id();

        service.receive(&id, 5).unwrap();
        let err = service.allocate(&id, 6).unwrap_err();
        assert!(matches!(err, InventoryError::InvariantViolation { .. }));

        let level = service.stock_level(&id).unwrap();
        assert_eq!(level.quantity_on_hand(), 5);
        assert_eq!(level.quantity_allocated(), 0);
    }

    #[test]
    fn mutations_on_unknown_products_are_rejected() {
        let service = open_service();
        let id = test_product_id();

        assert!(matches!(
            service.allocate(&id, 1),
            Err(InventoryError::StockLevelNotFound { .. })
        ));
        assert!(matches!(
            service.stock_level(&id),
            Err(InventoryError::StockLevelNotFound { .. })
        ));
    }

    #[test]
    fn catalog_check_gates_mutations_when_enabled() {
        let catalog = catalog_with(&["TEST-SKU-001"]);
        let service = StockService::new(catalog, ValidationConfig::enabled());

        service.receive(&test_product_id(), 10).unwrap();

        let unknown = ProductId::new("NONEXISTENT-SKU").unwrap();
        let err = service.receive(&unknown, 10).unwrap_err();
        match err {
            InventoryError::ProductNotInCatalog { identifier } => {
                assert_eq!(identifier, "NONEXISTENT-SKU");
            }
            other => panic!("Expected ProductNotInCatalog, got {other:?}"),
        }
        assert!(matches!(
            service.stock_level(&unknown),
            Err(InventoryError::StockLevelNotFound { .. })
        ));
    }

    #[test]
    fn disabled_catalog_check_skips_the_catalog_entirely() {
        // Empty catalog: every lookup would fail if consulted.
        let service = StockService::new(
            Arc::new(InMemoryCatalog::new()),
            ValidationConfig::disabled(),
        );
        service.receive(&test_product_id(), 3).unwrap();
    }

    /// Sink that records everything it is handed.
    #[derive(Default)]
    struct RecordingSink {
        counters: Mutex<Vec<Counter>>,
        durations: Mutex<Vec<TimerSpan>>,
    }

    impl RecordingSink {
        fn counters(&self) -> Vec<Counter> {
            self.counters.lock().unwrap().clone()
        }

        fn durations(&self) -> Vec<TimerSpan> {
            self.durations.lock().unwrap().clone()
        }
    }

    impl MetricsSink for RecordingSink {
        fn increment(&self, counter: Counter) {
            self.counters.lock().unwrap().push(counter);
        }

        fn record_duration(&self, span: TimerSpan, _elapsed: Duration) {
            self.durations.lock().unwrap().push(span);
        }
    }

    #[test]
    fn metered_operations_report_counters_and_timers() {
        let sink = Arc::new(RecordingSink::default());
        let metered = MeteredStockOperations::new(open_service(), sink.clone());
        let id = test_product_id();

        metered.receive(&id, 10).unwrap();
        metered.allocate(&id, 4).unwrap();
        metered.pick(&id, 1).unwrap();
        metered.deallocate(&id, 3).unwrap();
        metered.adjust(&id, -2).unwrap();
        metered.stock_level(&id).unwrap();

        assert_eq!(
            sink.counters(),
            vec![
                Counter::Receipt,
                Counter::Allocation,
                Counter::Pick,
                Counter::Deallocation,
                Counter::Adjustment,
                Counter::StockLevelQuery,
            ]
        );

        let durations = sink.durations();
        assert_eq!(durations.len(), 6);
        assert_eq!(durations[5], TimerSpan::Query);
        assert!(durations[..5]
            .iter()
            .all(|span| *span == TimerSpan::StockOperation));
    }

    #[test]
    fn rejected_operations_record_duration_but_no_counter() {
        let sink = Arc::new(RecordingSink::default());
        let metered = MeteredStockOperations::new(open_service(), sink.clone());
        let id = test_product_id();

        metered.receive(&id, 10).unwrap();
        assert!(metered.allocate(&id, 99).is_err());

        assert_eq!(sink.counters(), vec![Counter::Receipt]);
        assert_eq!(sink.durations().len(), 2);
    }
}
