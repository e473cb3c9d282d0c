use thiserror::Error;

/// Failure to retrieve a page body from the HTTP collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Failure of a single provider to produce metadata for a URL it matched.
///
/// These never escape the fetch pipeline; the orchestrator logs them and
/// moves on to the next matching provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
