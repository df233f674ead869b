//! HTTP interface: routes, handlers and error responses.

pub mod error;
pub mod handlers;

use crate::application::service::ReceiptService;
use crate::error::Result;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReceiptService>,
    /// When set, unknown receipt ids answer 404 instead of zero points.
    pub strict_lookup: bool,
}

impl AppState {
    pub fn new(service: ReceiptService, strict_lookup: bool) -> Self {
        Self {
            service: Arc::new(service),
            strict_lookup,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::receipt_points))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `state` on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    info!(addr = %listener.local_addr()?, "receipt processor listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("receipt processor stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
