use crate::core::http::HttpGet;
use crate::core::registry::ProviderRegistry;
use crate::core::scanner::PageScanner;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Turns an arbitrary URL into the list of directly embeddable URLs it
/// leads to.
///
/// A URL some provider already recognizes is returned as-is without any
/// network traffic. Anything else is treated as a page: its body is
/// fetched, scanned for candidate URLs, and filtered down to the ones a
/// provider recognizes.
pub struct Extractor {
    registry: Arc<ProviderRegistry>,
    http: Arc<dyn HttpGet>,
    scanner: PageScanner,
}

impl Extractor {
    pub fn new(registry: Arc<ProviderRegistry>, http: Arc<dyn HttpGet>) -> Self {
        Self {
            registry,
            http,
            scanner: PageScanner::new(),
        }
    }

    /// Never fails: an unreachable page simply yields no candidates.
    pub async fn extract(&self, url: &str) -> Vec<String> {
        if self.registry.has_match(url) {
            return vec![url.to_string()];
        }

        let html = match self.http.get(url).await {
            Ok(body) => body,
            Err(e) => {
                debug!("Page fetch failed for {}: {}", url, e);
                return Vec::new();
            }
        };

        let candidates = self.scanner.scan(&html);
        debug!("Scanned {} raw candidates from {}", candidates.len(), url);

        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for candidate in candidates {
            if self.registry.has_match(&candidate) && seen.insert(candidate.clone()) {
                urls.push(candidate);
            }
        }

        urls
    }
}
