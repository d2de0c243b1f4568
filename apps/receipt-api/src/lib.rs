//! # Receipt API
//!
//! HTTP service that accepts receipts and reports their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Service                             │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌────────────────────┐  ┌──────────────────┐  │
//! │  │  routes            │  │  error             │  │  config          │  │
//! │  │                    │  │                    │  │                  │  │
//! │  │ • process_receipt  │  │ • ApiError         │  │ • ApiConfig      │  │
//! │  │ • get_points       │  │ • ErrorCode        │  │ • env loading    │  │
//! │  │ • health           │  │ • IntoResponse     │  │                  │  │
//! │  └────────────────────┘  └────────────────────┘  └──────────────────┘  │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  AppState { store: Arc<ReceiptStore>, config: ApiConfig }        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_HOST` - Bind address (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_MAX_BODY_BYTES` - Request body cap (default: 1048576)
//! - `RECEIPT_API_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)

use std::sync::Arc;

use receipt_store::ReceiptStore;

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_router;

/// Shared application state.
pub struct AppState {
    pub store: Arc<ReceiptStore>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state over an existing store.
    pub fn new(store: Arc<ReceiptStore>, config: ApiConfig) -> Self {
        AppState { store, config }
    }
}
