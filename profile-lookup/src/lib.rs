//! # profile-lookup
//!
//! Resolves a Facebook profile from a free-text message: [`extract_identifier`] finds the profile
//! URL, [`ProfileResolver`] runs an ordered list of [`ResolveStrategy`] (Graph API, then public HTML
//! metadata) until one returns a [`ProfileData`]. Transport-agnostic; used by profile-bot.

mod config;
mod error;
mod graph;
mod html;
mod http;
mod identifier;
mod profile;
mod resolver;

pub use config::LookupConfig;
pub use error::{LookupError, Result};
pub use graph::GraphApiStrategy;
pub use html::{HtmlMetaStrategy, PageMeta};
pub use identifier::{extract_identifier, ProfileIdentifier};
pub use profile::{ProfileData, ProfileResult, ResolutionSource};
pub use resolver::{ProfileResolver, ResolveStrategy};
