use crate::core::embed::Embed;
use crate::core::error::ProviderError;
use async_trait::async_trait;

/// One embeddable-content source.
///
/// A provider decides whether a URL belongs to it and, for URLs it claims,
/// produces embed metadata. `Ok(None)` means the provider recognized the
/// URL but had nothing to say about it; errors are expected and recovered
/// by the caller trying the next matching provider.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;
    fn matches(&self, url: &str) -> bool;
    async fn fetch(&self, url: &str) -> Result<Option<Embed>, ProviderError>;
}

/// Ordered collection of providers. Registration order is priority order:
/// when several providers match a URL, the one registered first is asked
/// first. The registry is built once and read-only afterwards.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn register(&mut self, provider: Box<dyn Provider>) {
        self.providers.push(provider);
    }

    /// True iff at least one provider matches the URL.
    pub fn has_match(&self, url: &str) -> bool {
        self.first_match_from(url, 0).is_some()
    }

    /// Index of the first provider at or after `start` that matches the
    /// URL. This single scan primitive serves both "does anything match"
    /// and "who is next after a failed attempt".
    pub fn first_match_from(&self, url: &str, start: usize) -> Option<usize> {
        self.providers
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, provider)| provider.matches(url))
            .map(|(index, _)| index)
    }

    pub fn provider(&self, index: usize) -> Option<&dyn Provider> {
        self.providers.get(index).map(|boxed| boxed.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
