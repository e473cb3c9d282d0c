use crate::core::{Embed, HttpGet, Provider, ProviderError};
use crate::utils::{compile_patterns, matches_any};
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// Provider backed by a remote oEmbed endpoint.
///
/// Matching is a set of URL patterns; fetching asks the endpoint for a JSON
/// representation of the target URL and deserializes it straight into an
/// `Embed`. One instance per source, configured from a static table.
pub struct OEmbedProvider {
    name: &'static str,
    endpoint: String,
    patterns: Vec<Regex>,
    http: Arc<dyn HttpGet>,
}

impl OEmbedProvider {
    pub fn new(
        name: &'static str,
        endpoint: impl Into<String>,
        patterns: &[&str],
        http: Arc<dyn HttpGet>,
    ) -> Self {
        Self {
            name,
            endpoint: endpoint.into(),
            patterns: compile_patterns(patterns),
            http,
        }
    }

    fn endpoint_url(&self, url: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}format=json&url={}",
            self.endpoint,
            separator,
            urlencoding::encode(url)
        )
    }
}

#[async_trait]
impl Provider for OEmbedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, url: &str) -> bool {
        matches_any(&self.patterns, url)
    }

    async fn fetch(&self, url: &str) -> Result<Option<Embed>, ProviderError> {
        let request_url = self.endpoint_url(url);
        debug!("Querying {} oEmbed endpoint: {}", self.name, request_url);

        let body = self.http.get(&request_url).await?;
        let embed: Embed = serde_json::from_str(&body)?;

        if embed.is_empty() {
            return Ok(None);
        }

        Ok(Some(embed))
    }
}
