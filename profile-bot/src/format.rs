//! Reply formatting: profile caption and buttons, plus the fixed user-facing texts.
//!
//! Everything here is HTML for Telegram's `parse_mode=HTML`; user-provided values are escaped.

use profile_lookup::ProfileData;
use teloxide::utils::html::escape;

use crate::core::{ReplyButton, ReplyPayload};

pub const VIEW_PICTURE_LABEL: &str = "🔗 View Full Picture";
pub const GO_TO_PROFILE_LABEL: &str = "🌐 Go to Facebook";

#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Append a line naming how the profile was resolved.
    pub show_source: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { show_source: true }
    }
}

/// Name line, then username (or id when there is no username), then the optional source line.
pub fn format_caption(profile: &ProfileData, options: &FormatOptions) -> String {
    let mut lines = vec![format!("👤 <b>Name:</b> {}", escape(profile.name()))];

    if let Some(username) = profile.username() {
        lines.push(format!("🔖 <b>Username:</b> {}", escape(username)));
    } else if let Some(id) = profile.id() {
        lines.push(format!("🆔 <b>ID:</b> <code>{}</code>", escape(id)));
    }

    if options.show_source {
        lines.push(format!("⚙️ <b>Source:</b> {}", profile.source()));
    }

    lines.join("\n")
}

/// Builds the photo reply: caption, one row with "view picture" and "go to profile", and the avatar bytes.
pub fn format_profile_reply(
    profile: ProfileData,
    profile_url: &str,
    options: &FormatOptions,
) -> ReplyPayload {
    let caption = format_caption(&profile, options);
    let buttons = vec![vec![
        ReplyButton::new(VIEW_PICTURE_LABEL, profile.image_url()),
        ReplyButton::new(GO_TO_PROFILE_LABEL, profile_url),
    ]];
    ReplyPayload {
        caption,
        buttons,
        image: Some(profile.into_image()),
    }
}

pub fn usage_text() -> String {
    [
        "👋 <b>Welcome!</b>",
        "",
        "Send me a Facebook profile link and I will show the name, username or ID, and profile picture.",
        "",
        "👉 <b>Examples:</b>",
        "<code>https://facebook.com/zuck</code>",
        "<code>https://facebook.com/profile.php?id=123456789</code>",
    ]
    .join("\n")
}

pub fn invalid_link_text() -> String {
    "❌ Please send a valid <b>Facebook profile link</b>.".to_string()
}

pub fn searching_text() -> String {
    "🔎 Looking up the profile, please wait...".to_string()
}

pub fn failure_text(error: &str) -> String {
    format!(
        "😔 Could not fetch the profile information.\nReason: {}",
        escape(error)
    )
}

/// Sent instead of a photo reply that Telegram rejected.
pub fn photo_fallback_text(caption: &str) -> String {
    format!("{}\n\n⚠️ The profile picture could not be loaded.", caption)
}
