//! Serde side of the configuration, shaped like the TOML file.
//!
//! Every field carries a default, so an empty file, a partial section,
//! or no file at all still deserializes to the stock setup. `load`
//! flattens these into the public `types` structs.

use serde::Deserialize;

// ── Top-level ────────────────────────────────────────────────────────────────

/// Whole-file deserialization target.
#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub service: RawService,
    #[serde(default)]
    pub server: RawServer,
    #[serde(default)]
    pub llm: RawLlm,
    #[serde(default)]
    pub pictograms: RawPictograms,
}

#[derive(Deserialize)]
pub(super) struct RawService {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RawService {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawServer {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

// ── LLM ─────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawLlm {
    #[serde(rename = "default", default = "default_llm_provider")]
    pub provider: String,
    #[serde(default)]
    pub openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            openai: RawOpenAiConfig::default(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_temperature")]
    pub temperature: f32,
    #[serde(default = "default_openai_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            temperature: default_openai_temperature(),
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

// ── Pictograms ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawPictograms {
    #[serde(default = "default_pictogram_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_pictogram_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RawPictograms {
    fn default() -> Self {
        Self {
            api_base_url: default_pictogram_api_base_url(),
            timeout_seconds: default_pictogram_timeout_seconds(),
        }
    }
}

// ── Default functions (used by serde) ────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}
fn default_openai_api_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_openai_temperature() -> f32 {
    0.3
}
fn default_openai_timeout_seconds() -> u64 {
    60
}

fn default_pictogram_api_base_url() -> String {
    "https://api.arasaac.org/api".to_string()
}
fn default_pictogram_timeout_seconds() -> u64 {
    10
}
