//! # Validation Module
//!
//! The gate a submitted receipt must pass before it is given an id and
//! stored.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (receipt-api)                                   │
//! │  ├── Body size limit                                                   │
//! │  └── JSON decoding into NewReceipt                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Presence: non-blank fields, at least one item                     │
//! │  └── Format: date, time, monetary tokens                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Points engine                                                │
//! │  └── Re-parses what it needs; a bad token zeroes only its rule         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_new_receipt;
//! use receipt_core::{Item, NewReceipt};
//!
//! let new_receipt = NewReceipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     total: "1.25".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//! };
//! assert!(validate_new_receipt(&new_receipt).is_ok());
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::calendar::{parse_purchase_date, parse_purchase_time};
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewReceipt;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a submitted receipt, reporting the first problem found.
///
/// ## Order of Checks
/// 1. `retailer`, `purchaseDate`, `purchaseTime`, `total` are not blank
/// 2. `items` is not empty
/// 3. every item has a non-blank `shortDescription` and `price`
/// 4. `purchaseDate` is `YYYY-MM-DD`, `purchaseTime` is `HH:MM`
/// 5. `total` and every `price` are monetary tokens
///
/// Presence is checked for everything before any format check, so a
/// receipt missing its total and carrying a bad date reports the total.
pub fn validate_new_receipt(receipt: &NewReceipt) -> ValidationResult<()> {
    require_non_blank("retailer", &receipt.retailer)?;
    require_non_blank("purchaseDate", &receipt.purchase_date)?;
    require_non_blank("purchaseTime", &receipt.purchase_time)?;
    require_non_blank("total", &receipt.total)?;

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        require_non_blank(
            &format!("items[{}].shortDescription", index),
            &item.short_description,
        )?;
        require_non_blank(&format!("items[{}].price", index), &item.price)?;
    }

    validate_purchase_date(&receipt.purchase_date)?;
    validate_purchase_time(&receipt.purchase_time)?;
    validate_amount("total", &receipt.total)?;

    for (index, item) in receipt.items.iter().enumerate() {
        validate_amount(&format!("items[{}].price", index), &item.price)?;
    }

    Ok(())
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a purchase date token (`YYYY-MM-DD`, a real calendar date).
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-01-01").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_err());
/// ```
pub fn validate_purchase_date(date: &str) -> ValidationResult<NaiveDate> {
    parse_purchase_date(date).ok_or_else(|| {
        ValidationError::invalid_format("purchaseDate", "must be a calendar date as YYYY-MM-DD")
    })
}

/// Validates a purchase time token (24-hour `HH:MM`).
pub fn validate_purchase_time(time: &str) -> ValidationResult<NaiveTime> {
    parse_purchase_time(time).ok_or_else(|| {
        ValidationError::invalid_format("purchaseTime", "must be a 24-hour time as HH:MM")
    })
}

/// Validates a monetary token for the named field.
///
/// ## Rules
/// - Digits, a `.`, exactly two digits
/// - No sign (zero is allowed)
pub fn validate_amount(field: &str, amount: &str) -> ValidationResult<Money> {
    Money::parse(amount).map_err(|_| {
        ValidationError::invalid_format(field, "must be an amount like 12.34")
    })
}

/// Validates a receipt identifier (UUID).
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt_id;
///
/// assert!(validate_receipt_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_receipt_id("not-a-uuid").is_err());
/// ```
pub fn validate_receipt_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::required("id"));
    }

    uuid::Uuid::parse_str(id)
        .map_err(|_| ValidationError::invalid_format("id", "must be a valid UUID"))?;

    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
