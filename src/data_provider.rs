/// Trait for fetching remote branding assets, abstracting over the real HTTP client and mock implementations
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Trait for asset providers, implemented by both HttpProvider and MockProvider
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Get the raw body at `url`
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches assets over HTTP(S)
///
/// Requests carry no cookies or credentials, the equivalent of an anonymous
/// cross-origin image load.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
}

impl HttpProvider {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpProvider { client })
    }
}

#[async_trait]
impl AssetProvider for HttpProvider {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
