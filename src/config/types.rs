//! Resolved configuration structs handed to the rest of the service.
//!
//! Defaults and the file shape are `raw.rs` concerns; by the time one of
//! these is constructed every field holds its final value.

// ── Server ───────────────────────────────────────────────────────────────────

/// Inbound HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the listener to.
    pub bind: String,
}

// ── LLM ──────────────────────────────────────────────────────────────────────

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM seam configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Provider selector: `"openai"` or `"dummy"`.
    pub provider: String,
    pub openai: OpenAiConfig,
}

// ── Pictograms ───────────────────────────────────────────────────────────────

/// Remote pictogram API (ARASAAC) configuration.
#[derive(Debug, Clone)]
pub struct PictogramsConfig {
    /// API base, no trailing slash. Search and image URLs are built on it.
    pub api_base_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

// ── Top-level ────────────────────────────────────────────────────────────────

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level string ("error" | "warn" | "info" | "debug" | "trace").
    pub log_level: String,
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub pictograms: PictogramsConfig,
    /// Model credential, captured from `OPENAI_API_KEY` exactly once at load.
    /// `None` pins the simplifier to its deterministic fallback for the
    /// lifetime of the process.
    pub openai_api_key: Option<String>,
}
