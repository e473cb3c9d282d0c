pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod utils;

pub use crate::core::{
    BatchFetcher, Embed, Extractor, FetchError, FetchOrchestrator, HttpClient, HttpGet,
    PageScanner, Provider, ProviderError, ProviderRegistry,
};
pub use crate::providers::{OEmbedProvider, OpenGraphProvider};
