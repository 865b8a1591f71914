// Private module declaration
mod server;

use prometheus::{HistogramOpts, Histogram, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order submissions (received, accepted, rejected by kind and reason)
// - Currency conversions
// - Validation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    pub orders_received: IntCounter,
    pub orders_accepted: IntCounter,
    pub orders_rejected: IntCounterVec,
    pub currency_conversions: IntCounterVec,
    pub validation_duration: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_received = IntCounter::new(
            "orders_received_total",
            "Total order submissions received",
        )?;
        registry.register(Box::new(orders_received.clone()))?;

        let orders_accepted = IntCounter::new(
            "orders_accepted_total",
            "Total orders that passed validation",
        )?;
        registry.register(Box::new(orders_accepted.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Total orders rejected by validation"),
            &["kind", "reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let currency_conversions = IntCounterVec::new(
            Opts::new("currency_conversions_total", "Total prices converted to TWD"),
            &["from"],
        )?;
        registry.register(Box::new(currency_conversions.clone()))?;

        let validation_duration = Histogram::with_opts(
            HistogramOpts::new(
                "order_validation_duration_seconds",
                "Order validation pipeline duration",
            )
            .buckets(vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01]),
        )?;
        registry.register(Box::new(validation_duration.clone()))?;

        Ok(Self {
            registry,
            orders_received,
            orders_accepted,
            orders_rejected,
            currency_conversions,
            validation_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record the outcome of one submission
    pub fn record_order(&self, duration_secs: f64, rejection: Option<(&str, &str)>) {
        self.orders_received.inc();
        match rejection {
            None => self.orders_accepted.inc(),
            Some((kind, reason)) => self.orders_rejected.with_label_values(&[kind, reason]).inc(),
        }
        self.validation_duration.observe(duration_secs);
    }

    pub fn record_conversion(&self, from: &str) {
        self.currency_conversions.with_label_values(&[from]).inc();
    }
}
