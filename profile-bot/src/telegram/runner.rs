//! Long-poll runner: converts teloxide messages to core messages and runs the handler chain.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

/// Runs the teloxide REPL until it stops (ctrl-c or a fatal polling error).
///
/// The chain is awaited, not spawned, so replies within one chat keep message order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_polling(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Connected to Telegram");
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
            }
            respond(())
        }
    })
    .await;

    info!("Polling stopped");
    Ok(())
}
