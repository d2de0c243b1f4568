//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── MoneyError       - Monetary token could not be parsed             │
//! │  ├── ValidationError  - Inbound receipt rejected by the gate           │
//! │  └── RuleError        - A scoring rule could not read its field        │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Duplicate identifier / not found               │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError ──► ApiError ──► 400                            │
//! │        StoreError      ──► ApiError ──► 404 / 500                      │
//! │        RuleError       ──► contained: the rule contributes 0           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, token, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Money Error
// =============================================================================

/// Failures parsing a monetary token such as `"35.35"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The token is empty.
    #[error("amount is empty")]
    Empty,

    /// The token is not a well-formed unsigned amount.
    #[error("'{0}' is not a valid amount")]
    InvalidFormat(String),

    /// The amount does not fit the parser's integer representation.
    #[error("'{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when an inbound receipt doesn't meet requirements.
/// The gate stops at the first one, so the message names a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// The receipt has no items.
    #[error("items must contain at least one item")]
    NoItems,

    /// Invalid format (e.g., invalid UUID, invalid date, invalid amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error for a field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Rule Error
// =============================================================================

/// A scoring rule could not interpret the field it depends on.
///
/// ## Containment
/// These never leave the points engine. The aggregator turns every one of
/// them into a zero contribution and records it in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// `total` or an item `price` could not be parsed as an amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] MoneyError),

    /// `purchaseDate` is not `YYYY-MM-DD`.
    #[error("invalid purchase date '{0}'")]
    InvalidDate(String),

    /// `purchaseTime` is not `HH:MM`.
    #[error("invalid purchase time '{0}'")]
    InvalidTime(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for a single rule's contribution.
pub type RuleResult = Result<u64, RuleError>;

// =============================================================================
// Unit Tests
// =============================================================================
