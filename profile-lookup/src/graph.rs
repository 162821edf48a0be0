//! Graph API strategy: structured lookup of name, username, id and the large avatar.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::DEFAULT_MAX_IMAGE_BYTES;
use crate::error::{LookupError, Result};
use crate::http::fetch_image;
use crate::identifier::ProfileIdentifier;
use crate::profile::{ProfileData, ResolutionSource};
use crate::resolver::ResolveStrategy;

const GRAPH_FIELDS: &str = "name,username,id,picture.type(large)";

#[derive(Debug, Deserialize)]
struct GraphResponse {
    error: Option<GraphError>,
    name: Option<String>,
    username: Option<String>,
    id: Option<String>,
    picture: Option<GraphPicture>,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphPicture {
    data: Option<GraphPictureData>,
}

#[derive(Debug, Deserialize)]
struct GraphPictureData {
    url: Option<String>,
}

impl GraphResponse {
    fn picture_url(&self) -> Option<&str> {
        self.picture
            .as_ref()
            .and_then(|p| p.data.as_ref())
            .and_then(|d| d.url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

/// Looks the identifier up at `<base_url>/<identifier>`. The access token is optional.
#[derive(Debug, Clone)]
pub struct GraphApiStrategy {
    client: Client,
    base_url: String,
    access_token: Option<String>,
    max_image_bytes: usize,
}

impl GraphApiStrategy {
    pub fn new(client: Client, base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    async fn lookup(&self, identifier: &ProfileIdentifier) -> Result<GraphResponse> {
        let url = format!("{}/{}", self.base_url, identifier.value());
        let mut query = vec![("fields", GRAPH_FIELDS.to_string())];
        if let Some(token) = &self.access_token {
            query.push(("access_token", token.clone()));
        }

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), body_len = body.len(), "Graph API responded");

        // Graph reports errors as JSON with a 4xx status; only fall back to the status when the body is unreadable.
        match serde_json::from_str::<GraphResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(LookupError::Status(status.as_u16())),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ResolveStrategy for GraphApiStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::GraphApi
    }

    async fn resolve(&self, identifier: &ProfileIdentifier) -> Result<ProfileData> {
        let data = self.lookup(identifier).await?;

        if let Some(err) = &data.error {
            let message = err
                .message
                .clone()
                .unwrap_or_else(|| "Graph API error".to_string());
            return Err(LookupError::Provider(message));
        }

        let image_url = data
            .picture_url()
            .ok_or(LookupError::MissingPicture)?
            .to_string();
        let image = fetch_image(&self.client, &image_url, None, self.max_image_bytes).await?;

        info!(identifier = %identifier, image_len = image.len(), "Resolved via Graph API");

        let name = data.name.unwrap_or_else(|| "Unknown".to_string());
        Ok(ProfileData::new(name, image, image_url, ResolutionSource::GraphApi)?
            .with_username(data.username)
            .with_id(data.id))
    }
}
