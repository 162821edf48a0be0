//! Wraps teloxide::Bot and implements [`crate::core::Bot`]: HTML text, photos from memory, inline URL keyboards.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, LinkPreviewOptions, ParseMode,
};
use tracing::{error, warn};

use crate::core::{Bot as CoreBot, Chat, DbotError, ReplyButton, ReplyPayload, Result};

const PHOTO_FILE_NAME: &str = "profile.jpg";

/// Creates the teloxide bot; `api_url` points requests at another Bot API server (tests, local server).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL");
                DbotError::Config(format!("invalid Telegram API URL {}: {}", url_str, e))
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Buttons with unparsable URLs are dropped; `None` when nothing is left.
fn inline_keyboard(rows: &[Vec<ReplyButton>]) -> Option<InlineKeyboardMarkup> {
    let rows: Vec<Vec<InlineKeyboardButton>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|b| match reqwest::Url::parse(&b.url) {
                    Ok(url) => Some(InlineKeyboardButton::url(b.label.clone(), url)),
                    Err(e) => {
                        warn!(label = %b.label, url = %b.url, error = %e, "Skipping button with invalid URL");
                        None
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    (!rows.is_empty()).then(|| InlineKeyboardMarkup::new(rows))
}

fn no_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    async fn send_html(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(chat.id), text)
            .parse_mode(ParseMode::Html)
            .link_preview_options(no_preview());
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_html(chat, text, None).await
    }

    async fn send_reply(&self, chat: &Chat, reply: &ReplyPayload) -> Result<()> {
        let keyboard = inline_keyboard(&reply.buttons);
        let Some(image) = &reply.image else {
            return self.send_html(chat, &reply.caption, keyboard).await;
        };

        let photo = InputFile::memory(image.clone()).file_name(PHOTO_FILE_NAME);
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), photo)
            .caption(reply.caption.clone())
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
