//! Handler trait and the conversions a transport implements to feed it.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

/// Transport user → core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Transport message → core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of the [`crate::HandlerChain`]. Every hook has a pass-through default, so a handler
/// only overrides the phases it cares about.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Gate run for every handler before any `handle`. `false` ends the run with `Stop`.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// `Stop` or `Reply` ends the handle phase; `Continue` and `Ignore` pass to the next handler.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Called in reverse order with the final response.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
