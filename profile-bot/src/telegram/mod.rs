//! Telegram transport: teloxide adapters, [`crate::core::Bot`] implementation, long-poll REPL and webhook routes.

mod adapters;
mod bot_adapter;
mod runner;
mod webhook;

use std::fmt;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::run_polling;
pub use webhook::{webhook_routes, ChatLocks, SECRET_TOKEN_HEADER, WEBHOOK_PATH};

/// How updates reach the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// getUpdates long polling via the teloxide REPL.
    Polling,
    /// Telegram pushes updates to `POST /webhook`.
    Webhook,
}

impl TransportMode {
    /// Webhook when requested explicitly or when a public webhook URL is configured.
    pub fn select(webhook_flag: bool, webhook_url: Option<&str>) -> Self {
        if webhook_flag || webhook_url.is_some() {
            TransportMode::Webhook
        } else {
            TransportMode::Polling
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Polling => f.write_str("polling"),
            TransportMode::Webhook => f.write_str("webhook"),
        }
    }
}
