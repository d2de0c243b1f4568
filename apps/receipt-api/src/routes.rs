//! # HTTP Routes
//!
//! Router construction and request handlers.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /receipts/process                                                 │
//! │    body ─► NewReceipt (JSON) ─► validate ─► new v4 id ─► store.create   │
//! │    200 {"id": "<uuid>"}                                                 │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │    id ─► UUID check ─► store.get ─► points::breakdown                   │
//! │    200 {"points": <int>}                                                │
//! │                                                                         │
//! │  GET /health                                                            │
//! │    200 {"status": "ok"}                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use receipt_core::validation::{validate_new_receipt, validate_receipt_id};
use receipt_core::{points, NewReceipt};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

// =============================================================================
// Response Types
// =============================================================================

/// Response to `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response to `GET /receipts/{id}/points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    pub points: u64,
}

/// Response to `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the service router over shared state.
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Validates and stores a submitted receipt under a fresh id.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let body = body.map_err(|rejection| {
        debug!(error = %rejection, "Unreadable receipt body");
        ApiError::bad_request("Invalid request body")
    })?;

    let new_receipt: NewReceipt = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected receipt body");
        ApiError::bad_request("Invalid JSON")
    })?;

    validate_new_receipt(&new_receipt)?;

    let id = Uuid::new_v4().to_string();
    state.store.create(new_receipt.into_receipt(id.clone()))?;

    info!(receipt_id = %id, "Receipt processed");
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Scores the receipt stored under `id`.
async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    validate_receipt_id(&id).map_err(|_| ApiError::bad_request("Invalid ID format"))?;

    let receipt = state.store.get(&id)?;
    let breakdown = points::breakdown(&receipt);

    for (rule, error) in breakdown.failures() {
        debug!(receipt_id = %id, rule = rule.name(), error = %error, "Rule scored zero");
    }

    Ok(Json(PointsResponse {
        points: breakdown.total(),
    }))
}

/// Health check endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
