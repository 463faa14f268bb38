//! LLM Client — the single point of entry for generation service calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! Handlers receive a `TextGenerator` through `AppState`, never a global client.
//!
//! One attempt per request. Transport failures surface to the caller unchanged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GenerationParams;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("ANTHROPIC_API_KEY is not configured on the server")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Prompt in, text out. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a single user-role prompt and returns the first text block.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Whether a credential is present. Never exposes the credential itself.
    fn is_configured(&self) -> bool;

    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }

    /// First text block, rejecting missing or whitespace-only content.
    pub fn into_text(self) -> Result<String, LlmError> {
        match self.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    params: GenerationParams,
}

impl LlmClient {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        params: GenerationParams,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
            params,
        })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    /// Fails with `MissingApiKey` before touching the network when no key is set.
    pub async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = AnthropicRequest {
            model: &self.params.model,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await?.into_text()
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn model(&self) -> &str {
        &self.params.model
    }
}

/// Pulls `error.message` out of an Anthropic error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
