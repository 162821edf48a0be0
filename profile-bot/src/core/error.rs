//! Bot-side errors. Lookup failures are not errors here; they arrive as `ProfileResult::Failure`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Telegram rejected or failed a request (send, photo upload, API call).
    #[error("Bot error: {0}")]
    Bot(String),

    /// Invalid settings detected while building components.
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
