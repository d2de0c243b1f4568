//! # receipt-store: In-Memory Receipt Store
//!
//! The authoritative mapping from receipt id to receipt, shared by every
//! request in the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Processor Data Flow                          │
//! │                                                                         │
//! │  POST /receipts/process              GET /receipts/{id}/points         │
//! │       │ create(receipt)                   │ get(id)                     │
//! │       ▼                                   ▼                             │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   RwLock<HashMap<String, Arc<Receipt>>>                         │   │
//! │  │                                                                 │   │
//! │  │   create: write guard, entry() check-and-insert as one step    │   │
//! │  │   get:    read guard, clone the Arc                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  One instance per process, built in main, shared as Arc<ReceiptStore> │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::{Item, NewReceipt};
//! use receipt_store::{ReceiptStore, StoreError};
//!
//! let store = ReceiptStore::new();
//! let receipt = NewReceipt {
//!     retailer: "Target".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//!     ..NewReceipt::default()
//! }
//! .into_receipt("receipt-1");
//!
//! store.create(receipt.clone()).unwrap();
//! assert_eq!(*store.get("receipt-1").unwrap(), receipt);
//!
//! assert_eq!(
//!     store.create(receipt),
//!     Err(StoreError::duplicate("receipt-1"))
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::ReceiptStore;
