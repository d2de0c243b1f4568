//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Receipt API                        │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Json<T>, ApiError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad body / JSON? ──── ApiError::bad_request ─────┐              │  │
//! │  │         │                                          │              │  │
//! │  │         ▼                                          ▼              │  │
//! │  │  Validation? ───── ValidationError ────────────► ApiError ──────►│  │
//! │  │         │                                          ▲              │  │
//! │  │         ▼                                          │              │  │
//! │  │  Store? ────────── StoreError ─────────────────────┘              │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 404 {"code": "NOT_FOUND", "error": "No receipt found ..."}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ValidationError;
use receipt_store::StoreError;
use serde::Serialize;
use ts_rs::TS;

/// Message returned when the store refuses a create.
pub const CREATE_FAILED_MESSAGE: &str = "Database failure, could not create receipt";

/// Message returned when no receipt is stored under the requested id.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID";

/// API error returned from handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "error": "No receipt found for that ID"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, thiserror::Error)]
#[ts(export)]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    #[serde(rename = "error")]
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unreadable body, malformed JSON, or malformed id (400)
    BadRequest,

    /// Receipt failed validation (400)
    ValidationError,

    /// Receipt not found (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status sent with this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::BadRequest | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a not found error.
    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, NOT_FOUND_MESSAGE)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::not_found(),
            StoreError::DuplicateIdentifier { id } => {
                // Fresh v4 ids never collide, so this is an internal fault
                tracing::error!(receipt_id = %id, "Store rejected create: id already exists");
                ApiError::internal(CREATE_FAILED_MESSAGE)
            }
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
