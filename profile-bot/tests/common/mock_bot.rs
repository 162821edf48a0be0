//! Mock implementation of [`profile_bot::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on texts and photo replies without hitting Telegram.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use profile_bot::{Bot, Chat, DbotError, ReplyPayload, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)] // chat_id kept for assertions in some test files only
pub enum Sent {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, reply: ReplyPayload },
}

/// Mock Bot that records sends. With `fail_photos`, every `send_reply` carrying an image fails.
/// With `send_delay`, `send_message` sleeps before recording, like a slow Telegram round trip.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_photos: bool,
    send_delay: Option<Duration>,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_photos() -> Self {
        Self {
            fail_photos: true,
            ..Self::default()
        }
    }

    pub fn with_send_delay(delay: Duration) -> Self {
        Self {
            send_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Photo { .. } => None,
            })
            .collect()
    }

    pub fn photos(&self) -> Vec<ReplyPayload> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Photo { reply, .. } => Some(reply),
                Sent::Text { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if let Some(delay) = self.send_delay {
            tokio::time::sleep(delay).await;
        }
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &ReplyPayload) -> Result<()> {
        if self.fail_photos && reply.image.is_some() {
            return Err(DbotError::Bot("Bad Request: IMAGE_PROCESS_FAILED".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
