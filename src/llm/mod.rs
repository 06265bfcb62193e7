//! Chat model seam.
//!
//! The service talks to at most one model backend, selected once at startup
//! from `[llm] default` in the config. `ChatModel` is an enum over the
//! concrete providers so call sites dispatch without trait objects; each
//! backend adds a module under `providers/`, a variant here, and an arm in
//! [`ChatModel::complete`].

pub mod providers;

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// A configured model backend. Clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub enum ChatModel {
    OpenAiCompatible(providers::openai_compatible::OpenAiCompatibleProvider),
    Dummy(providers::dummy::DummyProvider),
}

impl ChatModel {
    /// Send a fully rendered prompt and return the model's text reply.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        match self {
            ChatModel::OpenAiCompatible(p) => p.complete(prompt).await,
            ChatModel::Dummy(p) => p.complete(prompt).await,
        }
    }
}
