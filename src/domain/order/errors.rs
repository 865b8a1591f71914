// ============================================================================
// Order Validation Errors
// ============================================================================
//
// The Display text of every variant is part of the HTTP contract: it is sent
// verbatim as the `detail` of a 400 response.
//
// ============================================================================

/// Structural and per-field format problems found by the schema validator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Order must be a JSON object")]
    NotAnObject,

    #[error("Field required: {0}")]
    MissingField(&'static str),

    #[error("{field} must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid id format")]
    InvalidId,

    #[error("Invalid location format")]
    InvalidLocation,

    #[error("Name contains non-English characters")]
    NonEnglishName,

    #[error("Each word in the name must start with a capital letter")]
    NameNotCapitalized,
}

/// Cross-field business rule violations found by an order validator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BusinessRuleError {
    #[error("Currency format is wrong")]
    UnsupportedCurrency(String),

    #[error("Price is over 2000")]
    PriceOverCeiling(f64),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleError),
}

impl FormatError {
    /// Short label used for the `reason` metric dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            FormatError::NotAnObject => "not_an_object",
            FormatError::MissingField(_) => "missing_field",
            FormatError::InvalidType { .. } => "invalid_type",
            FormatError::InvalidId => "invalid_id",
            FormatError::InvalidLocation => "invalid_location",
            FormatError::NonEnglishName => "non_english_name",
            FormatError::NameNotCapitalized => "name_not_capitalized",
        }
    }
}

impl BusinessRuleError {
    pub fn reason(&self) -> &'static str {
        match self {
            BusinessRuleError::UnsupportedCurrency(_) => "unsupported_currency",
            BusinessRuleError::PriceOverCeiling(_) => "price_over_ceiling",
        }
    }
}

impl OrderError {
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::Format(_) => "format",
            OrderError::BusinessRule(_) => "business_rule",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::Format(e) => e.reason(),
            OrderError::BusinessRule(e) => e.reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_messages() {
        assert_eq!(FormatError::InvalidLocation.to_string(), "Invalid location format");
        assert_eq!(
            FormatError::NonEnglishName.to_string(),
            "Name contains non-English characters"
        );
        assert_eq!(
            FormatError::NameNotCapitalized.to_string(),
            "Each word in the name must start with a capital letter"
        );
        assert_eq!(
            BusinessRuleError::UnsupportedCurrency("JPY".to_string()).to_string(),
            "Currency format is wrong"
        );
        assert_eq!(
            BusinessRuleError::PriceOverCeiling(2170.0).to_string(),
            "Price is over 2000"
        );
    }

    #[test]
    fn test_structural_messages_name_the_field() {
        assert_eq!(
            FormatError::MissingField("address.city").to_string(),
            "Field required: address.city"
        );
        assert_eq!(
            FormatError::InvalidType { field: "price", expected: "number" }.to_string(),
            "price must be a number"
        );
        assert!(FormatError::InvalidId.to_string().contains("id"));
    }

    #[test]
    fn test_order_error_is_transparent() {
        let err: OrderError = FormatError::NonEnglishName.into();
        assert_eq!(err.to_string(), "Name contains non-English characters");
        assert_eq!(err.kind(), "format");
        assert_eq!(err.reason(), "non_english_name");

        let err: OrderError = BusinessRuleError::PriceOverCeiling(2100.0).into();
        assert_eq!(err.to_string(), "Price is over 2000");
        assert_eq!(err.kind(), "business_rule");
    }
}
