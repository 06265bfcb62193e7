//! Handlers for the three service routes.
//!
//! Handlers never fail: model errors degrade inside the simplifier and
//! pictogram misses shrink the result list, so every handled request
//! returns 200. Malformed bodies are rejected by the `Json` extractor
//! before a handler runs.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::pictograms::PictogramRecord;

use super::AppState;

/// Service identifier existing consumers match on in the health body.
const SERVICE_NAME: &str = "python-simplification";

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct SimplifyRequest {
    text: String,
    #[serde(default = "default_locale")]
    locale: String,
}

#[derive(Deserialize)]
pub(super) struct PictogramsRequest {
    keywords: Vec<String>,
    #[serde(default = "default_locale")]
    locale: String,
}

#[derive(Serialize)]
pub(super) struct SimplifyResponse {
    original_text: String,
    simplified_text: String,
    pictograms: Vec<PictogramRecord>,
}

#[derive(Serialize)]
pub(super) struct PictogramsResponse {
    pictograms: Vec<PictogramRecord>,
}

fn default_locale() -> String {
    "en".to_string()
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

/// `POST /simplify`: simplify the text, extract keywords from the
/// simplified output, then resolve pictograms for them.
pub(super) async fn simplify(
    State(state): State<AppState>,
    Json(req): Json<SimplifyRequest>,
) -> Json<SimplifyResponse> {
    let simplified = state.simplifier.simplify(&req.text).await;
    let keywords = state.simplifier.extract_keywords(&simplified).await;
    debug!(
        locale = %req.locale,
        keywords = keywords.len(),
        "simplified request text"
    );
    let pictograms = state
        .pictograms
        .fetch_pictograms(&keywords, &req.locale)
        .await;

    Json(SimplifyResponse {
        original_text: req.text,
        simplified_text: simplified,
        pictograms,
    })
}

/// `POST /pictograms`: resolve caller-supplied keywords directly.
pub(super) async fn pictograms(
    State(state): State<AppState>,
    Json(req): Json<PictogramsRequest>,
) -> Json<PictogramsResponse> {
    let pictograms = state
        .pictograms
        .fetch_pictograms(&req.keywords, &req.locale)
        .await;
    Json(PictogramsResponse { pictograms })
}
