//! Profile identifier extraction from free-text messages.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Matches `[scheme][subdomain.]facebook.com/` followed by `profile.php?id=<digits>` or a username path segment.
static PROFILE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?(?:(?:www|m|web|mbasic)\.)?facebook\.com/(?:profile\.php\?id=(?P<id>\d+)|(?P<username>[^/?&#\s]+))",
    )
    .expect("profile URL pattern is valid")
});

/// Key used for provider lookups: a numeric user id or a username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileIdentifier {
    Id(String),
    Username(String),
}

impl ProfileIdentifier {
    pub fn value(&self) -> &str {
        match self {
            ProfileIdentifier::Id(v) | ProfileIdentifier::Username(v) => v,
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(self, ProfileIdentifier::Id(_))
    }

    /// `<base>/<value>`, e.g. `https://facebook.com/zuck`.
    pub fn canonical_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.value())
    }
}

impl fmt::Display for ProfileIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Finds the first Facebook profile URL in `text`. Returns `None` when there is none.
pub fn extract_identifier(text: &str) -> Option<ProfileIdentifier> {
    let caps = PROFILE_URL_RE.captures(text.trim())?;
    if let Some(id) = caps.name("id") {
        return Some(ProfileIdentifier::Id(id.as_str().to_string()));
    }
    caps.name("username")
        .map(|u| ProfileIdentifier::Username(u.as_str().to_string()))
}
