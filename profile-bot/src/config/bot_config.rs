//! BotConfig: BaseConfig + LookupConfig. Use load() for env-based loading.

use anyhow::Result;
use profile_lookup::LookupConfig;

use super::BaseConfig;
use crate::format::FormatOptions;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub lookup: LookupConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let lookup = LookupConfig::from_env();
        Ok(Self { base, lookup })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.lookup.timeout.is_zero() {
            anyhow::bail!("LOOKUP_TIMEOUT_SECS must be greater than 0");
        }
        for (name, url) in [
            ("GRAPH_API_URL", &self.lookup.graph_api_url),
            ("FACEBOOK_BASE_URL", &self.lookup.profile_base_url),
        ] {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("{} is not a valid URL: {}", name, url);
            }
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn lookup(&self) -> &LookupConfig {
        &self.lookup
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn health_addr(&self) -> &str {
        &self.base.health_addr
    }
    pub fn webhook_url(&self) -> Option<&str> {
        self.base.webhook_url.as_deref()
    }
    pub fn webhook_secret(&self) -> Option<&str> {
        self.base.webhook_secret.as_deref()
    }
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            show_source: self.base.show_source,
        }
    }
    /// True when both FB_APP_ID and FB_APP_SECRET are set.
    pub fn graph_api_enabled(&self) -> bool {
        self.lookup.app_token().is_some()
    }
}
