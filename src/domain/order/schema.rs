use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::errors::FormatError;
use super::value_objects::{Address, Order};

// ============================================================================
// Order Schema Validator
// ============================================================================
//
// Turns an untrusted JSON payload into a well-typed Order, or the first
// structural problem found. Two passes, in this order:
//   1. presence and type of every required field
//   2. per-field formats (id, name, address)
// Currency support is a business rule and is not checked here.
//
// ============================================================================

/// `A` plus seven ASCII digits. Other Unicode decimal digits are rejected.
static ORDER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A[0-9]{7}$").expect("order id pattern"));

static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:-[a-z]+)*$").expect("location pattern"));

static ENGLISH_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern"));

/// Validate a raw order submission.
pub fn validate_schema(payload: &Value) -> Result<Order, FormatError> {
    let order = parse_order(payload)?;

    validate_id(&order.id)?;
    validate_name(&order.name)?;
    validate_address(&order.address)?;

    Ok(order)
}

fn parse_order(payload: &Value) -> Result<Order, FormatError> {
    let fields = payload.as_object().ok_or(FormatError::NotAnObject)?;

    let id = require_str(fields, "id", "id")?;
    let name = require_str(fields, "name", "name")?;

    let address = require(fields, "address", "address")?
        .as_object()
        .ok_or(FormatError::InvalidType { field: "address", expected: "object" })?;
    let address = Address {
        city: require_str(address, "city", "address.city")?.to_string(),
        district: require_str(address, "district", "address.district")?.to_string(),
        street: require_str(address, "street", "address.street")?.to_string(),
    };

    let price = require(fields, "price", "price")?
        .as_f64()
        .ok_or(FormatError::InvalidType { field: "price", expected: "number" })?;
    let currency = require_str(fields, "currency", "currency")?;

    Ok(Order {
        id: id.to_string(),
        name: name.to_string(),
        address,
        price,
        currency: currency.to_string(),
    })
}

fn require<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    path: &'static str,
) -> Result<&'a Value, FormatError> {
    fields.get(key).ok_or(FormatError::MissingField(path))
}

fn require_str<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    path: &'static str,
) -> Result<&'a str, FormatError> {
    require(fields, key, path)?
        .as_str()
        .ok_or(FormatError::InvalidType { field: path, expected: "string" })
}

fn validate_id(id: &str) -> Result<(), FormatError> {
    if ORDER_ID.is_match(id) {
        Ok(())
    } else {
        Err(FormatError::InvalidId)
    }
}

/// Character set first, then capitalization.
fn validate_name(name: &str) -> Result<(), FormatError> {
    if !ENGLISH_NAME.is_match(name) {
        return Err(FormatError::NonEnglishName);
    }

    if !name.split_whitespace().all(is_title_case) {
        return Err(FormatError::NameNotCapitalized);
    }

    Ok(())
}

fn validate_address(address: &Address) -> Result<(), FormatError> {
    for part in [&address.city, &address.district, &address.street] {
        if !LOCATION.is_match(part) {
            return Err(FormatError::InvalidLocation);
        }
    }
    Ok(())
}

/// Uppercase letters may only follow non-letters, lowercase letters only
/// follow letters, and at least one letter must be present.
fn is_title_case(word: &str) -> bool {
    let mut previous_cased = false;
    let mut has_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            has_cased = true;
        } else {
            previous_cased = false;
        }
    }

    has_cased
}

// ============================================================================
// Unit Tests
// ============================================================================
