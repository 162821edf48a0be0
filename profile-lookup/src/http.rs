//! Shared HTTP helpers: client construction and avatar download.

use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::Client;
use tracing::debug;

use crate::error::{LookupError, Result};

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Downloads image bytes, reading at most `max_bytes`. Non-2xx is [`LookupError::Status`], an empty
/// body is [`LookupError::EmptyImage`], anything larger is [`LookupError::ImageTooLarge`].
pub(crate) async fn fetch_image(
    client: &Client,
    url: &str,
    user_agent: Option<&str>,
    max_bytes: usize,
) -> Result<Vec<u8>> {
    let mut request = client.get(url);
    if let Some(ua) = user_agent {
        request = request.header(USER_AGENT, ua);
    }
    let mut response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }
    if response.content_length().is_some_and(|len| len > max_bytes as u64) {
        return Err(LookupError::ImageTooLarge(max_bytes));
    }

    // Content-Length may be absent or wrong; the cap is enforced on the bytes actually read.
    let mut image = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if image.len() + chunk.len() > max_bytes {
            return Err(LookupError::ImageTooLarge(max_bytes));
        }
        image.extend_from_slice(&chunk);
    }
    debug!(url = %url, len = image.len(), "Fetched avatar");
    if image.is_empty() {
        return Err(LookupError::EmptyImage);
    }
    Ok(image)
}
