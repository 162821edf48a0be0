//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries what was sent so later handlers can log it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop the chain; the text is the user-visible reply (or photo caption).
    Reply(String),
}
