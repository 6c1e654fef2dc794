//! Conversation and reply types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who said a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One turn of prior conversation, oldest first in a history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

/// Where the reply text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Remote,
    Fallback,
}

/// Dispatcher output
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub suggested_actions: Vec<Action>,
    pub timestamp: DateTime<Utc>,
    pub source: ReplySource,
}

/// Severity of a notification action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Device-control hint inferred from the message. Not executed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ToggleLights {
        #[serde(rename = "value")]
        desired_state: bool,
    },
    SetTemperature {
        #[serde(rename = "value")]
        celsius: i64,
    },
    ShowNotification {
        message: String,
        level: NotificationLevel,
    },
}

impl Action {
    pub fn notify(message: impl Into<String>, level: NotificationLevel) -> Self {
        Action::ShowNotification {
            message: message.into(),
            level,
        }
    }
}
