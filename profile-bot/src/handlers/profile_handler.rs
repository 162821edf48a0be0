//! Profile lookup pipeline: extract identifier → searching notice → resolve → photo reply or failure notice.
//!
//! Every send is best-effort. A rejected photo degrades to a text reply; other send errors are only logged.

use std::sync::Arc;

use async_trait::async_trait;
use profile_lookup::{extract_identifier, ProfileResolver, ProfileResult};
use tracing::{error, info, instrument, warn};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::format::{
    failure_text, format_profile_reply, invalid_link_text, photo_fallback_text, searching_text,
    FormatOptions,
};

pub struct ProfileHandler {
    bot: Arc<dyn Bot>,
    resolver: Arc<ProfileResolver>,
    /// Base of the "go to profile" link.
    profile_base_url: String,
    format: FormatOptions,
}

impl ProfileHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        resolver: Arc<ProfileResolver>,
        profile_base_url: impl Into<String>,
        format: FormatOptions,
    ) -> Self {
        Self {
            bot,
            resolver,
            profile_base_url: profile_base_url.into(),
            format,
        }
    }

    async fn send_text(&self, message: &Message, text: &str) {
        if let Err(e) = self.bot.reply_to(message, text).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send message");
        }
    }
}

#[async_trait]
impl Handler for ProfileHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        let Some(identifier) = extract_identifier(text) else {
            info!("step: no profile link in message");
            let reply = invalid_link_text();
            self.send_text(message, &reply).await;
            return Ok(HandlerResponse::Reply(reply));
        };

        info!(identifier = %identifier, is_id = identifier.is_id(), "step: profile link found");
        let profile_url = identifier.canonical_url(&self.profile_base_url);
        self.send_text(message, &searching_text()).await;

        match self.resolver.resolve(&identifier).await {
            ProfileResult::Success(profile) => {
                let source = profile.source();
                let reply = format_profile_reply(profile, &profile_url, &self.format);
                match self.bot.send_reply(&message.chat, &reply).await {
                    Ok(()) => info!(source = %source, "step: profile reply sent"),
                    Err(e) => {
                        warn!(error = %e, "step: photo reply failed, sending text instead");
                        self.send_text(message, &photo_fallback_text(&reply.caption)).await;
                    }
                }
                Ok(HandlerResponse::Reply(reply.caption))
            }
            ProfileResult::Failure { error } => {
                warn!(identifier = %identifier, error = %error, "step: profile lookup failed");
                let reply = failure_text(&error);
                self.send_text(message, &reply).await;
                Ok(HandlerResponse::Reply(reply))
            }
        }
    }
}
