use crate::core::{Embed, HttpGet, Provider, ProviderError};
use crate::utils::{compile_patterns, matches_any};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Provider for sources without an oEmbed endpoint but with OpenGraph
/// markup on their pages.
///
/// Fetches the page itself and scrapes `og:` meta tags with the same
/// lightweight pattern approach used elsewhere in the crate. A matched page
/// that carries no `og:` tags resolves to nothing, which sends the fetch
/// pipeline on to the next matching provider.
pub struct OpenGraphProvider {
    name: &'static str,
    patterns: Vec<Regex>,
    property_first: Regex,
    content_first: Regex,
    http: Arc<dyn HttpGet>,
}

impl OpenGraphProvider {
    pub fn new(name: &'static str, patterns: &[&str], http: Arc<dyn HttpGet>) -> Self {
        // Meta tags put property= and content= in either order in the wild
        let property_first =
            Regex::new(r#"(?i)<meta[^>]+property=["']og:([^"']+)["'][^>]+content=["']([^"']*)["']"#)
                .expect("Failed to compile OpenGraph pattern");
        let content_first =
            Regex::new(r#"(?i)<meta[^>]+content=["']([^"']*)["'][^>]+property=["']og:([^"']+)["']"#)
                .expect("Failed to compile OpenGraph pattern");

        Self {
            name,
            patterns: compile_patterns(patterns),
            property_first,
            content_first,
            http,
        }
    }

    fn scrape_pairs(&self, html: &str) -> HashMap<String, String> {
        let mut pairs = HashMap::new();

        for captures in self.property_first.captures_iter(html) {
            let key = captures[1].to_lowercase();
            pairs.entry(key).or_insert_with(|| captures[2].to_string());
        }

        for captures in self.content_first.captures_iter(html) {
            let key = captures[2].to_lowercase();
            pairs.entry(key).or_insert_with(|| captures[1].to_string());
        }

        pairs
    }
}

#[async_trait]
impl Provider for OpenGraphProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, url: &str) -> bool {
        matches_any(&self.patterns, url)
    }

    async fn fetch(&self, url: &str) -> Result<Option<Embed>, ProviderError> {
        let html = self.http.get(url).await?;
        let pairs = self.scrape_pairs(&html);

        if pairs.is_empty() {
            debug!("No OpenGraph tags on {}", url);
            return Ok(None);
        }

        let base = Url::parse(url).ok();
        let resolve = |value: &str| -> String {
            match &base {
                Some(base) => base
                    .join(value)
                    .map(|joined| joined.to_string())
                    .unwrap_or_else(|_| value.to_string()),
                None => value.to_string(),
            }
        };

        let mut embed = Embed::default();

        for (key, value) in pairs {
            match key.as_str() {
                "title" => embed.title = Some(value),
                "description" => embed.description = Some(value),
                "type" => embed.kind = Some(value),
                "site_name" => embed.provider_name = Some(value),
                "image" => embed.thumbnail_url = Some(resolve(&value)),
                "url" => embed.url = Some(resolve(&value)),
                _ => {
                    embed
                        .extra
                        .insert(format!("og:{}", key), Value::String(value));
                }
            }
        }

        if embed.provider_name.is_none() {
            embed.provider_name = Some(self.name.to_string());
        }

        Ok(Some(embed))
    }
}
