//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate is the **heart** of the receipt processor. It holds the data
//! model, the validation gate and the points engine as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-api (axum handlers)                     │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │ validate + assign id         │ fetch + score          │
//! │  ┌──────────────▼──────────────────────────────▼───────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  points   │  │ validation│  │   │
//! │  │   │  Receipt  │  │   Money   │  │  7 rules  │  │   gate    │  │   │
//! │  │   │   Item    │  │  parsing  │  │ breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          receipt-store (RwLock<HashMap<id, Receipt>>)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, NewReceipt)
//! - [`calendar`] - Fixed-shape purchase date and time parsing
//! - [`money`] - Money type parsed from exact decimal tokens
//! - [`points`] - The seven scoring rules and their aggregator
//! - [`error`] - Domain error types
//! - [`validation`] - The validation gate run before a receipt is stored
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and logging are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{points, Item, Receipt};
//!
//! let receipt = Receipt {
//!     id: "7fb1377b-b223-49d9-a31a-5a02701dd310".to_string(),
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     total: "1.25".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//! };
//!
//! // 6 (retailer) + 25 (quarter multiple)
//! assert_eq!(points::calculate(&receipt), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use receipt_core::Money` instead of
// `use receipt_core::money::Money`

pub use error::{MoneyError, RuleError, ValidationError};
pub use money::{DecimalAmount, Money};
pub use points::{PointsBreakdown, Rule, RuleOutcome};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Date token layout for `purchaseDate` (`YYYY-MM-DD`).
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time token layout for `purchaseTime` (24-hour `HH:MM`).
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";
