//! Shared test helpers: message builder, config pointing at mock servers, recording bot.

pub mod mock_bot;

use std::time::Duration;

use chrono::Utc;
use profile_bot::{BaseConfig, BotConfig, Chat, Message, User};
use profile_lookup::LookupConfig;

#[allow(dead_code)]
pub fn create_test_message(content: &str) -> Message {
    create_chat_message(456, content)
}

#[allow(dead_code)]
pub fn create_chat_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

/// Config with Graph API credentials when `graph_url` is given, profile pages served from `web_url`.
#[allow(dead_code)]
pub fn test_config(graph_url: Option<String>, web_url: String) -> BotConfig {
    let with_credentials = graph_url.is_some();
    BotConfig {
        base: BaseConfig {
            bot_token: "test_bot_token_12345".to_string(),
            telegram_api_url: None,
            log_file: "logs/test.log".to_string(),
            health_addr: "127.0.0.1:0".to_string(),
            webhook_url: None,
            webhook_secret: None,
            show_source: true,
        },
        lookup: LookupConfig {
            app_id: with_credentials.then(|| "app".to_string()),
            app_secret: with_credentials.then(|| "secret".to_string()),
            graph_api_url: graph_url.unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
            profile_base_url: web_url,
            timeout: Duration::from_secs(5),
            ..LookupConfig::default()
        },
    }
}
