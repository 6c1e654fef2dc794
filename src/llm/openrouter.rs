//! `OpenRouter` chat-completions provider
//!
//! Speaks the `OpenAI`-compatible `/chat/completions` wire format with the
//! two informational headers `OpenRouter` uses for attribution.

use super::types::{Completion, CompletionRequest, PromptMessage};
use super::{CompletionClient, CompletionError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_REFERER: &str = "http://localhost:8000";
const DEFAULT_TITLE: &str = "SafeNest AI Assistant";
const ERROR_BODY_PREVIEW: usize = 200;

/// `OpenRouter` client. The API key travels with each request.
pub struct OpenRouterClient {
    client: Client,
    endpoint: String,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// Override the `HTTP-Referer` attribution header
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn translate_request(request: &CompletionRequest) -> OpenRouterRequest<'_> {
        OpenRouterRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
            stream: false,
        }
    }

    fn normalize_response(resp: OpenRouterResponse) -> Result<Completion, CompletionError> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::malformed("No choices in response"))?;

        let raw = choice.message.content.unwrap_or_default();
        Completion::from_raw(&raw).ok_or_else(CompletionError::empty)
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        if request.api_key.is_empty() {
            return Err(CompletionError::missing_credential());
        }

        let payload = Self::translate_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(request.timeout)
            .header("Authorization", format!("Bearer {}", request.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::timeout(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    CompletionError::network(format!("Connection failed: {e}"))
                } else {
                    CompletionError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::timeout(format!("Timed out reading response: {e}"))
            } else {
                CompletionError::network(format!("Failed to read response: {e}"))
            }
        })?;

        if status != StatusCode::OK {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            let preview = if preview.is_empty() {
                "No error message".to_string()
            } else {
                preview
            };
            return Err(CompletionError::upstream_status(
                status.as_u16(),
                format!("HTTP {status}: {preview}"),
            ));
        }

        let parsed: OpenRouterResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::malformed(format!("Failed to parse response: {e}")))?;

        Self::normalize_response(parsed)
    }

    fn provider(&self) -> &str {
        "openrouter"
    }
}

// OpenRouter wire types

#[derive(Debug, Serialize)]
struct OpenRouterRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    #[serde(default)]
    choices: Vec<OpenRouterChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: OpenRouterMessage,
}

#[derive(Debug, Deserialize)]
struct OpenRouterMessage {
    #[serde(default)]
    content: Option<String>,
}
