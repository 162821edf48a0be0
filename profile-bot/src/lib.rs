//! # Facebook profile lookup bot
//!
//! Wires the handler chain, the profile resolver from `profile-lookup`, and the Telegram transport.
//! Loads config from env and runs long polling or a webhook next to the liveness endpoint.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod format;
pub mod handlers;
pub mod health;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, Chat, DbotError, Handler, HandlerResponse, Message, ReplyButton,
    ReplyPayload, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    build_teloxide_bot, run_polling, webhook_routes, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper, TransportMode,
};

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig};
pub use format::FormatOptions;
pub use handlers::{LoggingHandler, ProfileHandler, StartHandler};
pub use health::{health_routes, HealthResponse};
pub use runner::{run_bot, run_lookup, shutdown_signal};
