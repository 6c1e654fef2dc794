//! HTTP API for the SafeNest assistant

mod handlers;
mod types;

pub use handlers::create_router;

use crate::assistant::{AssistantConfig, ChatDispatcher};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<ChatDispatcher>,
    pub config: Arc<AssistantConfig>,
}

impl AppState {
    pub fn new(dispatcher: ChatDispatcher, config: AssistantConfig) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config: Arc::new(config),
        }
    }
}
