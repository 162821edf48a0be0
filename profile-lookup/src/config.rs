//! Lookup config: optional Graph API app credentials, endpoint bases, timeout, user agent.
//! Loaded from env: FB_APP_ID, FB_APP_SECRET, GRAPH_API_URL, FACEBOOK_BASE_URL, LOOKUP_TIMEOUT_SECS.

use std::env;
use std::time::Duration;

pub const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://facebook.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Telegram's photo upload limit.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for [`crate::ProfileResolver::from_config`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub app_id: Option<String>,
    pub app_secret: Option<String>,
    /// Graph API base; requests go to `<graph_api_url>/<identifier>`.
    pub graph_api_url: String,
    /// Base of the canonical profile URL (`<profile_base_url>/<identifier>`).
    pub profile_base_url: String,
    /// Per-request timeout for every remote call.
    pub timeout: Duration,
    pub user_agent: String,
    /// Avatars larger than this fail the strategy that downloaded them.
    pub max_image_bytes: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_secret: None,
            graph_api_url: DEFAULT_GRAPH_API_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl LookupConfig {
    /// Loads from environment variables; missing values fall back to defaults. Blank credentials count as absent,
    /// and a zero or unparsable timeout falls back to the default.
    pub fn from_env() -> Self {
        let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        let timeout_secs = env::var("LOOKUP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            app_id: non_empty("FB_APP_ID"),
            app_secret: non_empty("FB_APP_SECRET"),
            graph_api_url: non_empty("GRAPH_API_URL")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_URL.to_string()),
            profile_base_url: non_empty("FACEBOOK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PROFILE_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    /// App access token `<app_id>|<app_secret>`; `None` unless both parts are set.
    pub fn app_token(&self) -> Option<String> {
        match (&self.app_id, &self.app_secret) {
            (Some(id), Some(secret)) => Some(format!("{}|{}", id, secret)),
            _ => None,
        }
    }
}
