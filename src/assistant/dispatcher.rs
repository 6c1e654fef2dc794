//! Chat dispatch: remote completion first, canned reply on any failure
//!
//! The dispatcher holds no conversation state. Each call gets the message,
//! the caller's history and a config, and always produces a `ChatReply`.

use super::actions::derive_actions;
use super::config::AssistantConfig;
use super::fallback::generate_fallback;
use super::prompt::build_messages;
use super::types::{ChatReply, ConversationTurn, ReplySource};
use crate::llm::{mask_key, Completion, CompletionClient, CompletionError, CompletionRequest};
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const OPENROUTER_KEY_PREFIX: &str = "sk-or-";

/// Turns a chat message into a reply plus suggested actions
pub struct ChatDispatcher {
    client: Arc<dyn CompletionClient>,
}

impl ChatDispatcher {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Dispatch with no external cancellation
    pub async fn dispatch(
        &self,
        message: &str,
        history: &[ConversationTurn],
        config: &AssistantConfig,
    ) -> ChatReply {
        self.dispatch_with_cancel(message, history, config, &CancellationToken::new())
            .await
    }

    /// Dispatch, abandoning the remote call if `cancel` fires.
    /// A cancelled call still returns a fallback reply.
    pub async fn dispatch_with_cancel(
        &self,
        message: &str,
        history: &[ConversationTurn],
        config: &AssistantConfig,
        cancel: &CancellationToken,
    ) -> ChatReply {
        let remote = self.remote_reply(message, history, config, cancel).await;
        assemble_reply(message, history, remote, &mut rand::thread_rng())
    }

    /// Dispatch with an injected random source for the fallback responder
    #[allow(dead_code)] // Used by tests to pin fallback output
    pub async fn dispatch_with_rng<R: Rng + ?Sized>(
        &self,
        message: &str,
        history: &[ConversationTurn],
        config: &AssistantConfig,
        rng: &mut R,
    ) -> ChatReply {
        let remote = self
            .remote_reply(message, history, config, &CancellationToken::new())
            .await;
        assemble_reply(message, history, remote, rng)
    }

    /// Single remote attempt, bounded by the configured timeout
    async fn remote_reply(
        &self,
        message: &str,
        history: &[ConversationTurn],
        config: &AssistantConfig,
        cancel: &CancellationToken,
    ) -> Result<Completion, CompletionError> {
        let Some(api_key) = config.api_key() else {
            return Err(CompletionError::missing_credential());
        };

        if !api_key.starts_with(OPENROUTER_KEY_PREFIX) {
            tracing::warn!(
                api_key = %mask_key(api_key),
                "API key format might be incorrect, expected sk-or-..."
            );
        }

        let request = CompletionRequest {
            api_key: api_key.to_string(),
            model: config.default_model.clone(),
            messages: build_messages(message, history, config.max_history_messages),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            timeout: config.timeout(),
        };

        tokio::select! {
            () = cancel.cancelled() => Err(CompletionError::cancelled()),
            result = tokio::time::timeout(config.timeout(), self.client.complete(&request)) => {
                result.unwrap_or_else(|_| {
                    Err(CompletionError::timeout(format!(
                        "No response within {}s",
                        config.timeout_seconds
                    )))
                })
            }
        }
    }
}

/// Pick the reply text and attach actions derived from the message
fn assemble_reply<R: Rng + ?Sized>(
    message: &str,
    history: &[ConversationTurn],
    remote: Result<Completion, CompletionError>,
    rng: &mut R,
) -> ChatReply {
    let lowered = message.to_lowercase();

    let (text, source) = match remote {
        Ok(completion) => (completion.text, ReplySource::Remote),
        Err(e) => {
            tracing::warn!(
                kind = e.kind.label(),
                attempted_request = e.kind.attempted_request(),
                error = %e.message,
                "Using fallback response system"
            );
            (generate_fallback(&lowered, history, rng), ReplySource::Fallback)
        }
    };

    let suggested_actions = derive_actions(&lowered);

    tracing::info!(
        source = ?source,
        actions = suggested_actions.len(),
        history = history.len(),
        "Chat dispatched"
    );

    ChatReply {
        text,
        suggested_actions,
        timestamp: Utc::now(),
        source,
    }
}
