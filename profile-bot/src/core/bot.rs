//! Bot abstraction for outbound messages.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide,
//! tests substitute a recording mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Message, ReplyPayload};

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends an HTML-formatted text message with link previews disabled.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `text` to the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends a photo with caption and inline buttons, or text with buttons when the payload has no image.
    async fn send_reply(&self, chat: &Chat, reply: &ReplyPayload) -> Result<()>;
}
