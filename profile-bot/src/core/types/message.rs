//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// One inbound message. Lives only for the duration of a single handler-chain run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages (photos, stickers, ...).
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// First whitespace-separated token if it is a bot command, without any `@botname` suffix.
    pub fn command(&self) -> Option<&str> {
        let first = self.content.split_whitespace().next()?;
        if !first.starts_with('/') {
            return None;
        }
        Some(first.split('@').next().unwrap_or(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(message("/start").command(), Some("/start"));
        assert_eq!(message("  /help@fb_profile_bot extra").command(), Some("/help"));
        assert_eq!(message("https://facebook.com/zuck").command(), None);
        assert_eq!(message("").command(), None);
    }
}
