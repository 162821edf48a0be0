//! Chat the message arrived in.

use serde::{Deserialize, Serialize};

pub const PRIVATE_CHAT: &str = "private";

/// Replies always go back to `id`. `chat_type` is "private" or "group".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.chat_type == PRIVATE_CHAT
    }
}
