use std::sync::Arc;
use std::time::Duration;

use feed_rs::parser;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::normalize::{normalize_entry, Article};
use crate::sources::{FeedSource, SourceRegistry};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed parse failed: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}

/// Outcome of fetching one source: its name paired with either the
/// normalized articles or the per-source error.
pub type SourceOutcome = (String, Result<Vec<Article>, FetchError>);

pub struct Fetcher {
    client: Client,
    registry: Arc<SourceRegistry>,
}

impl Fetcher {
    pub fn new(registry: Arc<SourceRegistry>, timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, registry }
    }

    /// Fetch and normalize one source. Single attempt; the caller decides
    /// what a failure means for the overall request.
    pub async fn fetch_source(&self, source: &FeedSource) -> Result<Vec<Article>, FetchError> {
        debug!("Fetching feed: {} ({})", source.name, source.url);

        let response = self.client.get(&source.url).send().await?;
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;

        let parsed = parser::parse(&bytes[..])?;

        let total = parsed.entries.len();
        let articles: Vec<Article> = parsed
            .entries
            .iter()
            .filter_map(|entry| normalize_entry(source, entry))
            .collect();

        if articles.len() < total {
            debug!(
                "Dropped {} malformed entries from '{}'",
                total - articles.len(),
                source.name
            );
        }

        Ok(articles)
    }

    /// Fetch every registered source concurrently and await all outcomes.
    /// Each fetch is independent; failures are reported per source, never
    /// propagated across sources.
    pub async fn fetch_all(&self) -> Vec<SourceOutcome> {
        info!("Fetching {} sources", self.registry.len());

        let fetches = self.registry.iter().map(|source| async move {
            let result = self.fetch_source(source).await;
            (source.name.clone(), result)
        });

        futures::future::join_all(fetches).await
    }
}
