//! Scripted toggle endpoint for handler tests

use async_trait::async_trait;
use likes_client::{ClientResult, ToggleLikeApi, ToggleResponse};
use likes_core::MessageId;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Answers calls from a queue of scripted results and records every call
///
/// An empty queue answers `200 {"message": "ok"}`.
#[derive(Default)]
pub struct MockToggleLikeApi {
    results: Mutex<VecDeque<ClientResult<ToggleResponse>>>,
    calls: Mutex<Vec<MessageId>>,
    delay: Option<Duration>,
}

impl MockToggleLikeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mock whose responses arrive after `delay`
    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Self::default()
        })
    }

    pub fn push_response(&self, response: ToggleResponse) {
        self.push_result(Ok(response));
    }

    pub fn push_result(&self, result: ClientResult<ToggleResponse>) {
        self.results.lock().push_back(result);
    }

    pub fn calls(&self) -> Vec<MessageId> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ToggleLikeApi for MockToggleLikeApi {
    async fn toggle_like(&self, message_id: &MessageId) -> ClientResult<ToggleResponse> {
        self.calls.lock().push(message_id.clone());
        let result = self
            .results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ToggleResponse::new(200, Some("ok"))));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        result
    }
}
