use crate::core::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// The transport boundary. Everything in the crate that needs a page body
/// goes through this trait, so tests can script responses without a network.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Production transport backed by reqwest.
pub struct HttpClient {
    client: reqwest::Client,
    retries: usize,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: u64, retries: usize) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, retries }
    }
}

#[async_trait]
impl HttpGet for HttpClient {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) => {
                    if attempt as usize > self.retries {
                        return Err(e.into());
                    }
                    warn!("Request failed (attempt {}): {}", attempt, e);
                    tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    continue;
                }
            };

            let status = response.status();

            if status.is_success() {
                return Ok(response.text().await?);
            }

            // 5xx responses are worth another try; anything else is final
            if status.is_server_error() && attempt as usize <= self.retries {
                warn!(
                    "HTTP {} from {} (attempt {}), retrying in {} seconds...",
                    status,
                    url,
                    attempt,
                    2_u64.pow(attempt)
                );
                tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                continue;
            }

            return Err(FetchError::Status(status));
        }
    }
}
