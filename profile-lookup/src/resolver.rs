//! Ordered strategy chain: each strategy is tried in turn, the first success wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::graph::GraphApiStrategy;
use crate::html::HtmlMetaStrategy;
use crate::http::build_client;
use crate::identifier::ProfileIdentifier;
use crate::profile::{ProfileData, ProfileResult, ResolutionSource};

/// One way of turning an identifier into a profile.
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    fn source(&self) -> ResolutionSource;
    async fn resolve(&self, identifier: &ProfileIdentifier) -> Result<ProfileData>;
}

#[derive(Clone, Default)]
pub struct ProfileResolver {
    strategies: Vec<Arc<dyn ResolveStrategy>>,
}

impl ProfileResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a strategy; strategies run in insertion order.
    pub fn add_strategy(mut self, strategy: Arc<dyn ResolveStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Graph API (only with both app id and secret) followed by the HTML fallback.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;
        let mut resolver = Self::new();

        match config.app_token() {
            Some(token) => {
                info!(graph_api_url = %config.graph_api_url, "Graph API lookup enabled");
                resolver = resolver.add_strategy(Arc::new(
                    GraphApiStrategy::new(client.clone(), config.graph_api_url.clone(), Some(token))
                        .with_max_image_bytes(config.max_image_bytes),
                ));
            }
            None => info!("FB_APP_ID / FB_APP_SECRET not set, Graph API lookup disabled"),
        }

        Ok(resolver.add_strategy(Arc::new(
            HtmlMetaStrategy::new(
                client,
                config.profile_base_url.clone(),
                config.user_agent.clone(),
            )
            .with_max_image_bytes(config.max_image_bytes),
        )))
    }

    pub fn sources(&self) -> Vec<ResolutionSource> {
        self.strategies.iter().map(|s| s.source()).collect()
    }

    #[instrument(skip(self, identifier), fields(identifier = %identifier))]
    pub async fn resolve(&self, identifier: &ProfileIdentifier) -> ProfileResult {
        let mut last_error = LookupError::NoStrategy;

        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.resolve(identifier).await {
                Ok(data) => {
                    info!(source = %source, name = %data.name(), "step: profile resolved");
                    return ProfileResult::Success(data);
                }
                Err(e) => {
                    warn!(source = %source, error = %e, "step: strategy failed, trying next");
                    last_error = e;
                }
            }
        }

        ProfileResult::Failure {
            error: last_error.to_string(),
        }
    }
}
