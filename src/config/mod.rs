//! Service configuration.
//!
//! One TOML file (`config/default.toml` unless `-f` points elsewhere)
//! resolved against built-in defaults, then `ECHOVOX_BIND` and
//! `ECHOVOX_LOG_LEVEL` env overrides on top. The model credential is
//! environment-only and never appears in the file.
//!
//! # Module layout
//!
//! - **types** — resolved structs the rest of the service consumes
//!   (`Config`, `LlmConfig`, `PictogramsConfig`).
//! - **raw** — private serde mirror of the TOML shape, every field
//!   defaulted.
//! - **load** — file read, parse, and override resolution.

mod load;
mod raw;
mod types;

pub use load::{load, load_from};
pub use types::*;

#[cfg(test)]
impl Config {
    /// Test fixture: dummy provider and unroutable endpoints, so nothing
    /// leaves the process.
    pub fn test_default() -> Self {
        Self {
            log_level: "info".into(),
            server: ServerConfig {
                bind: "127.0.0.1:0".into(),
            },
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://127.0.0.1:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    temperature: 0.0,
                    timeout_seconds: 1,
                },
            },
            pictograms: PictogramsConfig {
                api_base_url: "http://127.0.0.1:0/api".into(),
                timeout_seconds: 1,
            },
            openai_api_key: None,
        }
    }
}
