//! Answers `/start` and `/help` with the usage text.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::format::usage_text;

const USAGE_COMMANDS: &[&str] = &["/start", "/help"];

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = message.command() else {
            return Ok(HandlerResponse::Continue);
        };
        if !USAGE_COMMANDS.contains(&command) {
            return Ok(HandlerResponse::Continue);
        }

        info!(chat_id = message.chat.id, command = %command, "step: sending usage");
        let text = usage_text();
        if let Err(e) = self.bot.reply_to(message, &text).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send usage");
        }
        Ok(HandlerResponse::Reply(text))
    }
}
