//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "fb-profile-bot")]
#[command(about = "Telegram bot that looks up Facebook profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Receive updates on POST /webhook instead of long polling (implied by WEBHOOK_URL).
        #[arg(long)]
        webhook: bool,
    },
    /// Resolve one profile link and print the result, without Telegram.
    Lookup {
        /// Facebook profile link, e.g. https://facebook.com/zuck
        url: String,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
