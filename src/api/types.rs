//! API request and response types

use crate::assistant::{Action, ConversationTurn, ReplySource};
use serde::{Deserialize, Serialize};

/// Request to send a chat message. An absent `message` is empty, but an
/// explicit `null` is rejected. `history` may be absent or `null`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Prior turn as the frontend sends it
#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub message: String,
}

impl From<HistoryEntry> for ConversationTurn {
    /// Anything not sent by the user is treated as an assistant turn
    fn from(entry: HistoryEntry) -> Self {
        if entry.sender == "user" {
            ConversationTurn::user(entry.message)
        } else {
            ConversationTurn::assistant(entry.message)
        }
    }
}

/// Response for a chat message
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub actions: Vec<Action>,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
    pub source: ReplySource,
}

/// Assistant availability and model settings
#[derive(Debug, Serialize)]
pub struct AiStatusResponse {
    pub success: bool,
    pub openrouter_available: bool,
    pub current_model: String,
    pub fallback_model: String,
    pub max_tokens: u32,
    pub features: Vec<&'static str>,
    pub status: &'static str,
}

/// Health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
