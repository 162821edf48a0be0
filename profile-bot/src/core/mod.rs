//! Core types and traits: Handler, Bot, Message, ReplyPayload, HandlerResponse, error, logger.
//! Transport-agnostic; the telegram module implements [`Bot`] over teloxide.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ReplyButton, ReplyPayload, ToCoreMessage, ToCoreUser,
    User,
};
