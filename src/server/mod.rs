//! HTTP surface, the service's only inbound interface.
//!
//! Three routes: a health probe, the combined simplify flow, and a direct
//! pictogram passthrough. The router carries [`AppState`] (cheap to clone,
//! all fields reference-counted) plus a permissive CORS layer because the
//! consuming frontend runs in the browser.

mod api;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::AppError;
use crate::pictograms::PictogramService;
use crate::simplify::TextSimplifier;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub simplifier: Arc<TextSimplifier>,
    pub pictograms: Arc<PictogramService>,
}

impl AppState {
    pub fn new(simplifier: TextSimplifier, pictograms: PictogramService) -> Self {
        Self {
            simplifier: Arc::new(simplifier),
            pictograms: Arc::new(pictograms),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/simplify", post(api::simplify))
        .route("/pictograms", post(api::pictograms))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` fires.
pub async fn run(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "http server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("http server shut down");
    Ok(())
}
