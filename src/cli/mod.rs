use crate::config::Config;
use crate::core::{BatchFetcher, Extractor, FetchOrchestrator, HttpClient, HttpGet, ProviderRegistry};
use crate::providers;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use url::Url;

#[derive(Parser)]
#[command(name = "unfurl")]
#[command(about = "Resolve URLs to embed metadata")]
#[command(version)]
pub struct Cli {
    /// URLs to resolve
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Discover candidate embeddable URLs instead of fetching metadata
    #[arg(short, long)]
    pub extract: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of URLs resolved concurrently
    #[arg(short = 'j', long)]
    pub concurrent: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if self.verbose {
            println!("User agent: {}", config.user_agent);
            println!("Timeout: {}s", config.timeout);
        }

        let http: Arc<dyn HttpGet> = Arc::new(HttpClient::new(
            &config.user_agent,
            config.timeout,
            config.retries,
        ));

        let mut registry = ProviderRegistry::new();
        for provider in providers::defaults(http.clone()) {
            registry.register(provider);
        }
        let registry = Arc::new(registry);

        let urls: Vec<String> = self
            .urls
            .iter()
            .filter(|candidate| match Url::parse(candidate) {
                Ok(_) => true,
                Err(e) => {
                    warn!("Skipping invalid URL {}: {}", candidate, e);
                    false
                }
            })
            .cloned()
            .collect();

        if urls.is_empty() {
            anyhow::bail!("No valid URLs to resolve");
        }

        if self.extract {
            let extractor = Extractor::new(registry, http);

            for url in &urls {
                let candidates = extractor.extract(url).await;

                if urls.len() > 1 {
                    println!("{}:", url);
                }
                for candidate in candidates {
                    println!("{}", candidate);
                }
            }

            return Ok(());
        }

        let orchestrator = FetchOrchestrator::new(registry);

        if let [url] = urls.as_slice() {
            match orchestrator.fetch(url).await {
                Some(embed) => println!("{}", serde_json::to_string_pretty(&embed)?),
                None => anyhow::bail!("No provider produced an embed for {}", url),
            }

            return Ok(());
        }

        let concurrent = self.concurrent.unwrap_or(config.concurrent_fetches);
        let batch = BatchFetcher::new(orchestrator, concurrent);
        let results = batch.fetch_all(&urls).await;

        println!("{}", serde_json::to_string_pretty(&results)?);

        Ok(())
    }
}
