//! Mock completion client for dispatcher tests

use crate::llm::{Completion, CompletionClient, CompletionError, CompletionRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Returns queued results and records every request it sees
pub struct MockCompletionClient {
    responses: Mutex<VecDeque<Result<Completion, CompletionError>>>,
    delay: Duration,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sleep this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn queue_text(&self, text: &str) {
        let completion = Completion::from_raw(text).expect("queued text must not be blank");
        self.responses.lock().unwrap().push_back(Ok(completion));
    }

    pub fn queue_error(&self, error: CompletionError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::network("No mock response queued")))
    }

    fn provider(&self) -> &str {
        "mock"
    }
}
