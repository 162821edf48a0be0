//! Resolution result types.

use std::fmt;

use crate::error::{LookupError, Result};

/// Which strategy produced a [`ProfileData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    GraphApi,
    HtmlMeta,
}

impl ResolutionSource {
    pub fn label(&self) -> &'static str {
        match self {
            ResolutionSource::GraphApi => "Graph API",
            ResolutionSource::HtmlMeta => "Web page",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved profile. Always has a non-empty name and non-empty avatar bytes.
#[derive(Debug, Clone)]
pub struct ProfileData {
    name: String,
    username: Option<String>,
    id: Option<String>,
    image: Vec<u8>,
    image_url: String,
    source: ResolutionSource,
}

impl ProfileData {
    /// Fails with [`LookupError::EmptyName`] or [`LookupError::EmptyImage`].
    pub fn new(
        name: impl Into<String>,
        image: Vec<u8>,
        image_url: impl Into<String>,
        source: ResolutionSource,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LookupError::EmptyName);
        }
        if image.is_empty() {
            return Err(LookupError::EmptyImage);
        }
        Ok(Self {
            name,
            username: None,
            id: None,
            image,
            image_url: image_url.into(),
            source,
        })
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username.filter(|u| !u.is_empty());
        self
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id.filter(|i| !i.is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    pub fn into_image(self) -> Vec<u8> {
        self.image
    }
}

/// Outcome of [`crate::ProfileResolver::resolve`]. Never an `Err`: failure carries a readable message.
#[derive(Debug, Clone)]
pub enum ProfileResult {
    Success(ProfileData),
    Failure { error: String },
}

impl ProfileResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProfileResult::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProfileResult::Failure { error } => Some(error),
            ProfileResult::Success(_) => None,
        }
    }

    pub fn data(&self) -> Option<&ProfileData> {
        match self {
            ProfileResult::Success(data) => Some(data),
            ProfileResult::Failure { .. } => None,
        }
    }
}
