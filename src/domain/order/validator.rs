use super::errors::BusinessRuleError;
use super::value_objects::{Currency, Order, UnsupportedCurrency};

// ============================================================================
// Order Validator - Business Rules
// ============================================================================
//
// Runs after schema validation. Takes the order by value and hands back the
// normalized order, so the price/currency rewrite is part of the signature.
//
// ============================================================================

/// A business-rule validator selectable per currency.
pub trait OrderValidation: Send + Sync {
    fn validate(&self, order: Order) -> Result<Order, BusinessRuleError>;
}

/// The one validator every currency currently uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardOrderValidator;

impl StandardOrderValidator {
    /// Fixed USD -> TWD rate.
    pub const EXCHANGE_RATE: f64 = 31.0;

    /// Highest accepted price in TWD, inclusive.
    pub const PRICE_CEILING: f64 = 2000.0;

    pub fn new() -> Self {
        Self
    }
}

impl OrderValidation for StandardOrderValidator {
    fn validate(&self, mut order: Order) -> Result<Order, BusinessRuleError> {
        let currency: Currency = order
            .currency
            .parse()
            .map_err(|UnsupportedCurrency(code)| BusinessRuleError::UnsupportedCurrency(code))?;

        // Convert before the ceiling check
        if currency == Currency::Usd {
            order.price *= Self::EXCHANGE_RATE;
            order.currency = Currency::Twd.code().to_string();
        }

        if order.price > Self::PRICE_CEILING {
            return Err(BusinessRuleError::PriceOverCeiling(order.price));
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Address;

    fn order(price: f64, currency: &str) -> Order {
        Order {
            id: "A0000001".to_string(),
            name: "Melody Holiday Inn".to_string(),
            address: Address {
                city: "taipei-city".to_string(),
                district: "da-an-district".to_string(),
                street: "fuxing-south-road".to_string(),
            },
            price,
            currency: currency.to_string(),
        }
    }

    #[test]
    fn test_twd_order_is_unchanged() {
        let validated = StandardOrderValidator::new().validate(order(1999.99, "TWD")).unwrap();
        assert_eq!(validated, order(1999.99, "TWD"));
    }

    #[test]
    fn test_usd_is_converted() {
        let validated = StandardOrderValidator::new().validate(order(50.0, "USD")).unwrap();
        assert_eq!(validated.price, 50.0 * 31.0);
        assert_eq!(validated.currency, "TWD");
    }

    #[test]
    fn test_converted_price_is_checked_against_ceiling() {
        let result = StandardOrderValidator::new().validate(order(70.0, "USD"));
        assert_eq!(result, Err(BusinessRuleError::PriceOverCeiling(2170.0)));
    }

    #[test]
    fn test_ceiling_is_exclusive() {
        let validator = StandardOrderValidator::new();

        assert!(validator.validate(order(2000.0, "TWD")).is_ok());
        assert!(matches!(
            validator.validate(order(2000.01, "TWD")),
            Err(BusinessRuleError::PriceOverCeiling(_))
        ));
        assert!(matches!(
            validator.validate(order(2100.0, "TWD")),
            Err(BusinessRuleError::PriceOverCeiling(_))
        ));
    }

    #[test]
    fn test_usd_converting_to_ceiling_passes() {
        // 64 * 31 = 1984, 65 * 31 = 2015
        let validator = StandardOrderValidator::new();
        assert_eq!(validator.validate(order(64.0, "USD")).unwrap().price, 1984.0);
        assert!(validator.validate(order(65.0, "USD")).is_err());
    }

    #[test]
    fn test_unsupported_currency() {
        let validator = StandardOrderValidator::new();

        for code in ["JPY", "usd", "", "TWD "] {
            assert_eq!(
                validator.validate(order(10.0, code)),
                Err(BusinessRuleError::UnsupportedCurrency(code.to_string()))
            );
        }
    }

    #[test]
    fn test_currency_checked_before_price() {
        let result = StandardOrderValidator::new().validate(order(99999.0, "EUR"));
        assert!(matches!(result, Err(BusinessRuleError::UnsupportedCurrency(_))));
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let validator = StandardOrderValidator::new();
        let once = validator.validate(order(60.0, "USD")).unwrap();
        let twice = validator.validate(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
