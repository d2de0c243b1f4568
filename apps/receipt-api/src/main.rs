//! # Receipt API
//!
//! HTTP server for the receipt processor.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Server                               │
//! │                                                                         │
//! │  env ──► ApiConfig ──► tracing ──► ReceiptStore ──► Router             │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                              TcpListener (8080) ──► axum::serve        │
//! │                                                        │                │
//! │                                   Ctrl+C / SIGTERM ──► graceful stop   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use receipt_api::{create_router, ApiConfig, AppState};
use receipt_store::ReceiptStore;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Failed to build log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting Receipt API server...");
    info!(
        host = %config.host,
        port = config.port,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    // Create shared state
    let store = Arc::new(ReceiptStore::new());
    let state = Arc::new(AppState::new(store, config.clone()));
    let app = create_router(state);

    // Bind the listener
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!(addr = %listener.local_addr()?, "Receipt API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
