//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use profile_lookup::ProfileResolver;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot;
use crate::handlers::{LoggingHandler, ProfileHandler, StartHandler};
use crate::telegram::{build_teloxide_bot, TelegramBotAdapter};

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Outbound side used by handlers; tests swap in a mock.
    pub bot: Arc<dyn Bot>,
    pub resolver: Arc<ProfileResolver>,
}

/// Creates the teloxide bot, its [`Bot`] adapter and the profile resolver.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url())?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let resolver = Arc::new(ProfileResolver::from_config(config.lookup())?);

    info!(sources = ?resolver.sources(), "Profile resolver ready");

    Ok(BotComponents {
        teloxide_bot,
        bot,
        resolver,
    })
}

/// Logging → start/help → profile lookup.
pub fn build_handler_chain(
    config: &BotConfig,
    bot: Arc<dyn Bot>,
    resolver: Arc<ProfileResolver>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(ProfileHandler::new(
            bot,
            resolver,
            config.lookup().profile_base_url.clone(),
            config.format_options(),
        )))
}
