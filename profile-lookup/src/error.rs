//! Lookup errors. Every strategy failure maps to one [`LookupError`]; the resolver turns the last
//! one into a user-facing message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    /// Built through `From`, which drops the request URL: Graph URLs carry the app access token.
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Provider(String),

    #[error("No profile picture found")]
    MissingPicture,

    #[error("No og:image found")]
    MissingOgImage,

    #[error("Profile picture is empty")]
    EmptyImage,

    #[error("Profile picture is too large (over {0} bytes)")]
    ImageTooLarge(usize),

    #[error("Display name is empty")]
    EmptyName,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No resolution strategy configured")]
    NoStrategy,
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Http(e.without_url())
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
