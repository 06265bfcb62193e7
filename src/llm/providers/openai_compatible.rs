//! OpenAI-compatible chat completion backend.
//!
//! One stateless round-trip per call: the rendered prompt goes out as a
//! single user message and the first choice's content comes back. Wire
//! types stay private; prompt templating lives in the simplifier, which
//! never sees them.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::llm::ProviderError;

// ── Public provider ───────────────────────────────────────────────────────────

/// Adapter for any endpoint speaking the `/v1/chat/completions` protocol:
/// OpenAI itself, local servers (Ollama, LM Studio), or hosted lookalikes.
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    api_base_url: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
}

impl OpenAiCompatibleProvider {
    /// `api_key` is `None` for keyless local endpoints; when present it is
    /// sent as a bearer token on every request.
    pub fn new(
        api_base_url: String,
        model: String,
        temperature: f32,
        timeout_seconds: u64,
        api_key: Option<String>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url,
            model,
            temperature,
            api_key,
        })
    }

    /// Send `prompt` as the sole user message and return the first choice's
    /// trimmed content.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let payload = self.payload(prompt);

        debug!(
            model = %payload.model,
            temperature = ?payload.temperature,
            prompt_len = prompt.len(),
            "sending chat completion request"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(payload = %json, "full request payload");
        }

        let mut request = self.client.post(&self.api_base_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!(url = %self.api_base_url, error = %e, "chat completion transport failure");
            ProviderError::Request(e.to_string())
        })?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                error!(error = %e, "undecodable chat completion response");
                ProviderError::Request(format!("failed to parse response body: {e}"))
            })?;

        debug!(
            choices = parsed.choices.len(),
            "received chat completion response"
        );

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ProviderError::Request("empty or missing content in response".into()))
    }

    fn payload(&self, prompt: &str) -> ChatCompletionRequest {
        // The gpt-5 family rejects requests carrying a temperature.
        let temperature = (!self.model.starts_with("gpt-5")).then_some(self.temperature);

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature,
        }
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// Error envelope used by OpenAI and compatible APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Shape a non-success response into a provider error, decoding the
/// standard error envelope when the body carries one.
async fn error_from_response(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => {
            let code = match envelope.error.code {
                Some(serde_json::Value::String(s)) => format!(" [code={s}]"),
                Some(other) => format!(" [code={other}]"),
                None => String::new(),
            };
            format!("HTTP {status}{code}: {}", envelope.error.message)
        }
        Err(_) => format!("HTTP {status}: {body}"),
    };

    error!(%status, %message, "chat completion returned HTTP error");
    ProviderError::Request(message)
}
