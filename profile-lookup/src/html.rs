//! HTML fallback: reads the Open Graph image and the page title from the public profile page.

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::config::DEFAULT_MAX_IMAGE_BYTES;
use crate::error::{LookupError, Result};
use crate::http::fetch_image;
use crate::identifier::ProfileIdentifier;
use crate::profile::{ProfileData, ResolutionSource};
use crate::resolver::ResolveStrategy;

/// Metadata consumed from a profile page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub image: Option<String>,
}

impl PageMeta {
    /// Title is `og:title`, else `<title>`. Blank values count as missing.
    pub fn parse(body: &str) -> Self {
        let html = Html::parse_document(body);
        let title = select_og(&html, "title").or_else(|| select_title(&html));
        let image = select_og(&html, "image");
        Self { title, image }
    }
}

fn select_og(html: &Html, tag: &str) -> Option<String> {
    let selector = Selector::parse(&format!("meta[property=\"og:{}\"]", tag)).ok()?;
    html.select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn select_title(html: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let element = html.select(&selector).next()?;
    let text = element.text().collect::<String>().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Fetches `<profile_base_url>/<identifier>` like a browser and scrapes it.
#[derive(Debug, Clone)]
pub struct HtmlMetaStrategy {
    client: Client,
    profile_base_url: String,
    user_agent: String,
    max_image_bytes: usize,
}

impl HtmlMetaStrategy {
    pub fn new(
        client: Client,
        profile_base_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client,
            profile_base_url: profile_base_url.into(),
            user_agent: user_agent.into(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }
}

#[async_trait]
impl ResolveStrategy for HtmlMetaStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::HtmlMeta
    }

    async fn resolve(&self, identifier: &ProfileIdentifier) -> Result<ProfileData> {
        let page_url = identifier.canonical_url(&self.profile_base_url);
        let response = self
            .client
            .get(&page_url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let final_url = response.url().clone();
        let body = response.text().await?;

        let meta = PageMeta::parse(&body);
        debug!(page_url = %final_url, title = ?meta.title, image = ?meta.image, "Parsed profile page");

        let image_ref = meta.image.ok_or(LookupError::MissingOgImage)?;
        let image_url = final_url
            .join(&image_ref)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", image_ref, e)))?;
        let image = fetch_image(
            &self.client,
            image_url.as_str(),
            Some(&self.user_agent),
            self.max_image_bytes,
        )
        .await?;

        info!(identifier = %identifier, image_len = image.len(), "Resolved via profile page");

        let name = meta.title.unwrap_or_else(|| "Unknown".to_string());
        let data = ProfileData::new(name, image, image_url.to_string(), ResolutionSource::HtmlMeta)?;
        Ok(match identifier {
            ProfileIdentifier::Id(id) => data.with_id(Some(id.clone())),
            ProfileIdentifier::Username(u) => data.with_username(Some(u.clone())),
        })
    }
}
