use crate::core::embed::Embed;
use crate::core::registry::ProviderRegistry;
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Walks the providers matching a URL, in registry order, until one of
/// them produces metadata.
pub struct FetchOrchestrator {
    registry: Arc<ProviderRegistry>,
}

impl FetchOrchestrator {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// First successful match wins. A provider that errors or comes back
    /// empty just hands the URL to the next matching provider; the cursor
    /// strictly advances, so the walk ends after at most one pass over the
    /// registry. No failure escapes this method.
    pub async fn fetch(&self, url: &str) -> Option<Embed> {
        let mut cursor = 0;

        while let Some(index) = self.registry.first_match_from(url, cursor) {
            let provider = self.registry.provider(index)?;

            match provider.fetch(url).await {
                Ok(Some(embed)) if !embed.is_empty() => {
                    debug!("Provider {} resolved {}", provider.name(), url);
                    return Some(embed);
                }
                Ok(_) => {
                    debug!(
                        "Provider {} had no metadata for {}, trying next match",
                        provider.name(),
                        url
                    );
                }
                Err(e) => {
                    warn!("Provider {} failed for {}: {}", provider.name(), url, e);
                }
            }

            cursor = index + 1;
        }

        None
    }
}

/// Resolves many URLs through one orchestrator, keeping only the hits.
pub struct BatchFetcher {
    orchestrator: FetchOrchestrator,
    pub concurrent_limit: usize,
}

impl BatchFetcher {
    pub fn new(orchestrator: FetchOrchestrator, concurrent_limit: usize) -> Self {
        Self {
            orchestrator,
            concurrent_limit: concurrent_limit.max(1),
        }
    }

    /// Resolves each URL independently; one URL failing never disturbs the
    /// others. The result is keyed by the URL exactly as passed in and
    /// iterates in source order. URLs that resolved to nothing are simply
    /// absent.
    ///
    /// URLs run concurrently up to `concurrent_limit`, but each URL's own
    /// fallback chain stays sequential inside its future.
    pub async fn fetch_all(&self, urls: &[String]) -> IndexMap<String, Embed> {
        let orchestrator = &self.orchestrator;

        let resolved: Vec<(String, Option<Embed>)> = stream::iter(urls)
            .map(|url| async move {
                let embed = orchestrator.fetch(url).await;
                (url.clone(), embed)
            })
            .buffered(self.concurrent_limit)
            .collect()
            .await;

        resolved
            .into_iter()
            .filter_map(|(url, embed)| embed.map(|embed| (url, embed)))
            .collect()
    }
}
