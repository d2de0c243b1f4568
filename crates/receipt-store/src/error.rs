//! # Store Error Types
//!
//! Error types for receipt store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptStore::create / ReceiptStore::get                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← returned as-is, never logged or retried    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipt-api) ← mapped to an HTTP status                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Client sees {"code": "...", "error": "..."}                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
///
/// Both are terminal outcomes of a single attempt; the store leaves its
/// contents untouched when returning either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A receipt with this id is already stored.
    ///
    /// ## When This Occurs
    /// - The caller reused an id
    /// - Two concurrent creates raced on one id; exactly one of them wins
    #[error("receipt already exists: {id}")]
    DuplicateIdentifier { id: String },

    /// No receipt is stored under this id.
    #[error("receipt not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a DuplicateIdentifier error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        StoreError::DuplicateIdentifier { id: id.into() }
    }

    /// Creates a NotFound error.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
