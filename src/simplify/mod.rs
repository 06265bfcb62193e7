//! Text simplification with a model path and a deterministic fallback.
//!
//! The backend is fixed at construction: with a credential (or the dummy
//! provider) operations go through the chat model and degrade to the
//! deterministic algorithms on any provider error; without one they run the
//! deterministic algorithms directly. Neither operation ever returns an
//! error to its caller; degrade-on-error is the contract.

pub mod heuristic;
pub mod prompts;

use tracing::{info, warn};

use crate::config::LlmConfig;
use crate::llm::{ChatModel, ProviderError, providers};

// ── Backend ──────────────────────────────────────────────────────────────────

/// Simplification backend, chosen once at startup.
#[derive(Debug, Clone)]
enum Backend {
    /// Chat model first, deterministic algorithms on failure.
    Model(ChatModel),
    /// Deterministic algorithms only.
    Heuristic,
}

/// Turns raw text into an easy-to-read rendering and a bounded keyword list.
#[derive(Debug, Clone)]
pub struct TextSimplifier {
    backend: Backend,
}

impl TextSimplifier {
    /// Build from config. The `openai` provider without a credential pins the
    /// simplifier to the deterministic fallback; that decision is made here
    /// and never re-evaluated per call.
    pub fn from_config(config: &LlmConfig, api_key: Option<String>) -> Result<Self, ProviderError> {
        if config.provider == "openai" && api_key.is_none() {
            info!("no model credential configured; simplifier runs its deterministic fallback");
            return Ok(Self {
                backend: Backend::Heuristic,
            });
        }
        let model = providers::build(config, api_key)?;
        Ok(Self {
            backend: Backend::Model(model),
        })
    }

    /// Deterministic-only simplifier.
    pub fn fallback_only() -> Self {
        Self {
            backend: Backend::Heuristic,
        }
    }

    /// Simplifier backed by an explicit model. Tests inject scripted
    /// providers through this.
    pub fn with_model(model: ChatModel) -> Self {
        Self {
            backend: Backend::Model(model),
        }
    }

    /// Whether operations will try a chat model first.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, Backend::Model(_))
    }

    /// Rewrite `text` in easy-to-read form.
    pub async fn simplify(&self, text: &str) -> String {
        match &self.backend {
            Backend::Model(model) => {
                let prompt = prompts::render(prompts::FALC_SIMPLIFY, text);
                match model.complete(&prompt).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!(error = %e, "model simplification failed; using fallback");
                        heuristic::simplify(text)
                    }
                }
            }
            Backend::Heuristic => heuristic::simplify(text),
        }
    }

    /// Extract up to eight keywords suitable for pictogram search.
    pub async fn extract_keywords(&self, text: &str) -> Vec<String> {
        match &self.backend {
            Backend::Model(model) => {
                let prompt = prompts::render(prompts::KEYWORD_EXTRACT, text);
                match model.complete(&prompt).await {
                    Ok(reply) => parse_keyword_reply(&reply),
                    Err(e) => {
                        warn!(error = %e, "model keyword extraction failed; using fallback");
                        heuristic::extract_keywords(text)
                    }
                }
            }
            Backend::Heuristic => heuristic::extract_keywords(text),
        }
    }
}

/// Split a comma-separated model reply into at most eight trimmed keywords.
fn parse_keyword_reply(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .take(heuristic::MAX_KEYWORDS)
        .collect()
}
