//! Dummy chat model: scripted replies, no network.
//! Used for testing the model path and for smoke runs without a real API key.

use crate::llm::ProviderError;

#[derive(Debug, Clone, Default)]
pub enum DummyProvider {
    /// Echo the prompt back prefixed with `[echo]`.
    #[default]
    Echo,
    /// Always reply with the given text.
    Canned(String),
    /// Always fail, as an unreachable remote would.
    Fail,
}

impl DummyProvider {
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        match self {
            DummyProvider::Echo => Ok(format!("[echo] {prompt}")),
            DummyProvider::Canned(reply) => Ok(reply.clone()),
            DummyProvider::Fail => Err(ProviderError::Request("scripted failure".into())),
        }
    }
}
