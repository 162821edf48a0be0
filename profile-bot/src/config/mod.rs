//! Bot configuration: BaseConfig (Telegram, logging, transport) + LookupConfig (Graph API, HTML fallback).

mod base;
mod bot_config;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
