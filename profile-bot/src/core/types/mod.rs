//! Core types: user, chat, message, reply payload, handler response, and Handler trait.

mod chat;
mod handler;
mod message;
mod reply;
mod response;
mod user;

pub use chat::{Chat, PRIVATE_CHAT};
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use reply::{ReplyButton, ReplyPayload};
pub use response::HandlerResponse;
pub use user::User;
