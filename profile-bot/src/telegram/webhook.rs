//! Webhook transport: `POST /webhook` receives Telegram updates and runs the handler chain.
//!
//! Updates of the same chat are processed one at a time through [`ChatLocks`]; different chats run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use teloxide::types::{Update, UpdateKind};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

pub const WEBHOOK_PATH: &str = "/webhook";
pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Entries are pruned once the map grows past this and the chat is idle.
const MAX_IDLE_CHAT_LOCKS: usize = 1024;

/// One async mutex per chat id.
#[derive(Clone, Default)]
pub struct ChatLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl ChatLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock_for(&self, chat_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        if locks.len() > MAX_IDLE_CHAT_LOCKS {
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        }
        locks.entry(chat_id).or_default().clone()
    }

    pub async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}

#[derive(Clone)]
struct WebhookState {
    chain: HandlerChain,
    secret: Option<String>,
    locks: ChatLocks,
}

/// Router with the webhook route. When `secret` is set, requests must carry it in the secret-token header.
pub fn webhook_routes(chain: HandlerChain, secret: Option<String>) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(handle_update))
        .with_state(WebhookState {
            chain,
            secret,
            locks: ChatLocks::new(),
        })
}

async fn handle_update(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> StatusCode {
    if let Some(expected) = &state.secret {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            warn!(update_id = update.id.0, "Webhook call with wrong secret token");
            return StatusCode::UNAUTHORIZED;
        }
    }

    let UpdateKind::Message(msg) = update.kind else {
        debug!(update_id = update.id.0, "Ignoring non-message update");
        return StatusCode::OK;
    };

    let core_msg = TelegramMessageWrapper(&msg).to_core();
    let lock = state.locks.lock_for(core_msg.chat.id).await;
    let _guard = lock.lock().await;

    if let Err(e) = state.chain.handle(&core_msg).await {
        error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
    }
    // Always 200 so Telegram does not redeliver.
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_chat_shares_lock() {
        let locks = ChatLocks::new();
        let a = locks.lock_for(1).await;
        let b = locks.lock_for(1).await;
        let c = locks.lock_for(2).await;
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(locks.len().await, 2);
    }
}
