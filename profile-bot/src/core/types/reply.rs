//! Outbound reply payload: caption, inline URL buttons, optional image.

/// Inline button that opens a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyButton {
    pub label: String,
    pub url: String,
}

impl ReplyButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A formatted reply. `caption` is HTML; `buttons` are rows laid out side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyPayload {
    pub caption: String,
    pub buttons: Vec<Vec<ReplyButton>>,
    pub image: Option<Vec<u8>>,
}

impl ReplyPayload {
    pub fn button_count(&self) -> usize {
        self.buttons.iter().map(Vec::len).sum()
    }
}
