//! Base config: Telegram connection, logging, liveness listener, webhook. Loaded from env.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_LOG_FILE: &str = "logs/fb-profile-bot.log";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN (or TELEGRAM_TOKEN)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// HEALTH_ADDR, else `0.0.0.0:$PORT`, else `0.0.0.0:8080`
    pub health_addr: String,
    /// WEBHOOK_URL: public URL registered with setWebhook
    pub webhook_url: Option<String>,
    /// WEBHOOK_SECRET: expected X-Telegram-Bot-Api-Secret-Token
    pub webhook_secret: Option<String>,
    /// SHOW_SOURCE: add the resolution source line to captions
    pub show_source: bool,
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// A missing token is an error: the bot cannot start without it.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| non_empty("BOT_TOKEN"))
            .or_else(|| non_empty("TELEGRAM_TOKEN"))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "BOT_TOKEN not set: export BOT_TOKEN (or TELEGRAM_TOKEN), add it to .env, or pass --token"
                )
            })?;
        let telegram_api_url = non_empty("TELEGRAM_API_URL").or_else(|| non_empty("TELOXIDE_API_URL"));
        let log_file = non_empty("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let health_addr = non_empty("HEALTH_ADDR").unwrap_or_else(|| {
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("0.0.0.0:{}", port)
        });
        let show_source = env::var("SHOW_SOURCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            health_addr,
            webhook_url: non_empty("WEBHOOK_URL"),
            webhook_secret: non_empty("WEBHOOK_SECRET"),
            show_source,
        })
    }

    /// Validate URLs and the listen address.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.webhook_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("WEBHOOK_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.health_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("HEALTH_ADDR is not a valid socket address: {}", self.health_addr);
        }
        Ok(())
    }
}
