use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::validator::{OrderValidation, StandardOrderValidator};

/// Currency code -> business validator.
///
/// Codes without a registration fall back to the default validator, which
/// is also what rejects unsupported currencies.
pub struct ValidatorRegistry {
    validators: HashMap<String, Arc<dyn OrderValidation>>,
    default: Arc<dyn OrderValidation>,
}

impl ValidatorRegistry {
    pub fn new(default: Arc<dyn OrderValidation>) -> Self {
        Self {
            validators: HashMap::new(),
            default,
        }
    }

    /// Register a validator for a currency code, replacing any previous one.
    /// This is where a currency-specific rule set plugs in.
    pub fn register(&mut self, currency: impl Into<String>, validator: Arc<dyn OrderValidation>) {
        let currency = currency.into();
        info!("Registering order validator for currency: {}", currency);
        self.validators.insert(currency, validator);
    }

    pub fn validator_for(&self, currency: &str) -> Arc<dyn OrderValidation> {
        self.validators
            .get(currency)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Currency codes with an explicit registration.
    pub fn currencies(&self) -> Vec<&str> {
        self.validators.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new(Arc::new(StandardOrderValidator::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Address, BusinessRuleError, Order};

    struct RejectAll;

    impl OrderValidation for RejectAll {
        fn validate(&self, order: Order) -> Result<Order, BusinessRuleError> {
            Err(BusinessRuleError::UnsupportedCurrency(order.currency))
        }
    }

    fn order(currency: &str) -> Order {
        Order {
            id: "A0000001".to_string(),
            name: "Melody Holiday Inn".to_string(),
            address: Address {
                city: "taipei-city".to_string(),
                district: "da-an-district".to_string(),
                street: "fuxing-south-road".to_string(),
            },
            price: 10.0,
            currency: currency.to_string(),
        }
    }

    #[test]
    fn test_default_serves_every_currency() {
        let registry = ValidatorRegistry::default();
        assert!(registry.currencies().is_empty());

        assert!(registry.validator_for("TWD").validate(order("TWD")).is_ok());
        assert!(registry.validator_for("USD").validate(order("USD")).is_ok());
        assert!(registry.validator_for("JPY").validate(order("JPY")).is_err());
    }

    #[test]
    fn test_registered_validator_takes_precedence() {
        let mut registry = ValidatorRegistry::default();
        registry.register("TWD", Arc::new(RejectAll));

        assert_eq!(registry.currencies(), vec!["TWD"]);
        assert!(registry.validator_for("TWD").validate(order("TWD")).is_err());
        assert!(registry.validator_for("USD").validate(order("USD")).is_ok());
    }
}
