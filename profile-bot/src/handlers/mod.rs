//! Handler implementations: logging, start/help, profile lookup.

mod logging_handler;
mod profile_handler;
mod start_handler;

pub use logging_handler::LoggingHandler;
pub use profile_handler::ProfileHandler;
pub use start_handler::StartHandler;
