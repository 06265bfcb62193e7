//! Chat model provider implementations.
//!
//! [`build`] is the startup factory: it maps the configured provider name
//! to a concrete backend, which the service then treats as fixed for the
//! process lifetime.

pub mod dummy;
pub mod openai_compatible;

use crate::config::LlmConfig;
use crate::llm::{ChatModel, ProviderError};

/// Map the configured provider name to a backend.
///
/// `api_key` comes from the environment, never from TOML; the dummy
/// backend ignores it.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<ChatModel, ProviderError> {
    match config.provider.as_str() {
        "dummy" => Ok(ChatModel::Dummy(dummy::DummyProvider::default())),
        "openai" | "openai-compatible" => {
            let oai = &config.openai;
            let provider = openai_compatible::OpenAiCompatibleProvider::new(
                oai.api_base_url.clone(),
                oai.model.clone(),
                oai.temperature,
                oai.timeout_seconds,
                api_key,
            )?;
            Ok(ChatModel::OpenAiCompatible(provider))
        }
        _ => Err(ProviderError::UnknownProvider(config.provider.clone())),
    }
}
