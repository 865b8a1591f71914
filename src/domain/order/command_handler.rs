use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::Metrics;

use super::errors::{BusinessRuleError, OrderError};
use super::registry::ValidatorRegistry;
use super::schema::validate_schema;
use super::value_objects::{Currency, Order};

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: raw payload → schema validator → registry lookup
//               → business validator → normalized order
//
// ============================================================================

pub struct OrderCommandHandler {
    registry: ValidatorRegistry,
    metrics: Arc<Metrics>,
}

impl OrderCommandHandler {
    pub fn new(registry: ValidatorRegistry, metrics: Arc<Metrics>) -> Self {
        Self { registry, metrics }
    }

    /// Validate one submission, returning the normalized order or the first
    /// problem found.
    pub fn handle(&self, payload: &Value) -> Result<Order, OrderError> {
        let started = Instant::now();
        let result = self.run_pipeline(payload);
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(order) => {
                tracing::debug!(
                    order_id = %order.id,
                    currency = %order.currency,
                    price = order.price,
                    "Order accepted"
                );
                self.metrics.record_order(elapsed, None);
            }
            Err(e) => {
                tracing::info!(kind = e.kind(), reason = e.reason(), "Order rejected: {}", e);
                self.metrics.record_order(elapsed, Some((e.kind(), e.reason())));
            }
        }

        result
    }

    fn run_pipeline(&self, payload: &Value) -> Result<Order, OrderError> {
        let order = validate_schema(payload)?;
        let submitted_currency = order.currency.clone();

        let validator = self.registry.validator_for(&submitted_currency);
        let result = validator.validate(order);

        // A ceiling rejection still happened after conversion
        let converted = match &result {
            Ok(order) => order.currency != submitted_currency,
            Err(BusinessRuleError::PriceOverCeiling(_)) => {
                submitted_currency.parse::<Currency>() == Ok(Currency::Usd)
            }
            Err(_) => false,
        };
        if converted {
            self.metrics.record_conversion(&submitted_currency);
        }

        Ok(result?)
    }
}
