//! Remote chat-completion abstraction
//!
//! Provides a common interface for the completion provider the assistant
//! consults before falling back to canned responses.

mod error;
mod openrouter;
mod types;

#[allow(unused_imports)] // Kind is matched on in tests
pub use error::{CompletionError, CompletionErrorKind};
pub use openrouter::OpenRouterClient;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for completion providers
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Make a single completion request. No retries.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError>;

    /// Provider name for logs
    fn provider(&self) -> &str;
}

/// Logging wrapper for completion clients
pub struct LoggingClient {
    inner: Arc<dyn CompletionClient>,
    provider: String,
}

impl LoggingClient {
    pub fn new(inner: Arc<dyn CompletionClient>) -> Self {
        let provider = inner.provider().to_string();
        Self { inner, provider }
    }
}

#[async_trait]
impl CompletionClient for LoggingClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        tracing::debug!(
            provider = %self.provider,
            model = %request.model,
            api_key = %mask_key(&request.api_key),
            messages = request.messages.len(),
            "Completion request"
        );

        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(completion) => {
                tracing::info!(
                    provider = %self.provider,
                    model = %request.model,
                    duration_ms = %duration.as_millis(),
                    chars = completion.text.chars().count(),
                    "Completion succeeded"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %self.provider,
                    model = %request.model,
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.label(),
                    error = %e.message,
                    "Completion failed"
                );
            }
        }

        result
    }

    fn provider(&self) -> &str {
        &self.provider
    }
}
