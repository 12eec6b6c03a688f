//! Metrics sink abstraction (mechanics only).
//!
//! The inventory core emits counters and timer spans through this boundary and
//! never consumes a return value: metrics are fire-and-forget. Exporter choice
//! (StatsD, Prometheus, logs) is an implementation concern behind the trait.

use std::time::Duration;

/// Counter vocabulary for inventory operations.
///
/// The event counters belong to the surrounding event pipeline, which reports
/// through the same sink.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Counter {
    Allocation,
    Deallocation,
    Adjustment,
    Pick,
    Receipt,
    StockLevelQuery,
    EventProcessed,
    EventError,
}

impl Counter {
    /// Stable metric name (e.g. "inventory.allocation").
    pub fn name(self) -> &'static str {
        match self {
            Counter::Allocation => "inventory.allocation",
            Counter::Deallocation => "inventory.deallocation",
            Counter::Adjustment => "inventory.adjustment",
            Counter::Pick => "inventory.pick",
            Counter::Receipt => "inventory.receipt",
            Counter::StockLevelQuery => "inventory.stock_level_query",
            Counter::EventProcessed => "inventory.event_processed",
            Counter::EventError => "inventory.event_error",
        }
    }
}

/// Timer-span vocabulary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimerSpan {
    StockOperation,
    Query,
    EventProcessing,
}

impl TimerSpan {
    /// Stable metric name (e.g. "inventory.stock_operation.duration").
    pub fn name(self) -> &'static str {
        match self {
            TimerSpan::StockOperation => "inventory.stock_operation.duration",
            TimerSpan::Query => "inventory.query.duration",
            TimerSpan::EventProcessing => "inventory.event_processing.duration",
        }
    }
}

/// Metrics reporting capability.
///
/// Implementations must tolerate concurrent callers and must not fail the
/// caller: reporting problems are swallowed or logged, never propagated.
pub trait MetricsSink: Send + Sync {
    /// Increment a counter by one.
    fn increment(&self, counter: Counter);

    /// Record an elapsed duration under a timer span.
    fn record_duration(&self, span: TimerSpan, elapsed: Duration);
}

/// Sink that discards everything. Default when metrics are not wired up.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn increment(&self, _counter: Counter) {}

    fn record_duration(&self, _span: TimerSpan, _elapsed: Duration) {}
}
