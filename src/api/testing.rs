//! Scripted transport for tests that need ordering or timing control

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Duration;

use super::transport::{ApiRequest, HttpReply, Transport};
use crate::utils::StudyHubError;

struct Scripted {
    delay: Duration,
    reply: Result<HttpReply, String>,
}

/// Replays queued replies in order and records every request it saw
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.reply_after(Duration::ZERO, status, body)
    }

    pub fn reply_after(self, delay: Duration, status: u16, body: Value) -> Self {
        self.replies.lock().push_back(Scripted {
            delay,
            reply: Ok(HttpReply { status, body }),
        });
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.lock().push_back(Scripted {
            delay: Duration::ZERO,
            reply: Err(message.to_string()),
        });
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<HttpReply, StudyHubError> {
        self.requests.lock().push(request);
        let next = self.replies.lock().pop_front();
        let Some(scripted) = next else {
            return Err(StudyHubError::NetworkError("no scripted reply left".into()));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.reply.map_err(StudyHubError::NetworkError)
    }
}
