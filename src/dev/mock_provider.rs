/// Mock asset provider for development and testing
use crate::data_provider::AssetProvider;
use crate::error::FetchError;
use crate::fixtures;
use crate::teams;
use crate::urls;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
enum MockAsset {
    Body(Vec<u8>),
    Failure(FetchError),
    Delayed(Duration, Vec<u8>),
}

/// Provider that serves registered in-memory bodies instead of making real requests
///
/// Unregistered URLs answer HTTP 404.
#[derive(Debug, Default)]
pub struct MockProvider {
    assets: HashMap<String, MockAsset>,
    requests: Mutex<HashMap<String, usize>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, url: &str, body: Vec<u8>) -> Self {
        self.assets.insert(url.to_string(), MockAsset::Body(body));
        self
    }

    pub fn with_failure(mut self, url: &str, error: FetchError) -> Self {
        self.assets.insert(url.to_string(), MockAsset::Failure(error));
        self
    }

    /// Serve `body` only after `delay`
    pub fn with_delayed_asset(mut self, url: &str, delay: Duration, body: Vec<u8>) -> Self {
        self.assets.insert(url.to_string(), MockAsset::Delayed(delay, body));
        self
    }

    /// Register a solid spot image in each team's declared color at the
    /// URL `template` expands to
    pub fn with_declared_spots(mut self, template: &str) -> Self {
        for team in teams::all_teams() {
            let c = team.spot_color;
            let url = urls::expand_template(template, team.id);
            self.assets
                .insert(url, MockAsset::Body(fixtures::spot_png(16, [c.r, c.g, c.b])));
        }
        self
    }

    /// Number of fetches made for `url`
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .map(|counts| counts.get(url).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn record(&self, url: &str) {
        if let Ok(mut counts) = self.requests.lock() {
            *counts.entry(url.to_string()).or_insert(0) += 1;
        }
    }
}

#[async_trait]
impl AssetProvider for MockProvider {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.record(url);
        match self.assets.get(url) {
            Some(MockAsset::Body(body)) => {
                info!("MockProvider: Returning {} bytes for {}", body.len(), url);
                Ok(body.clone())
            }
            Some(MockAsset::Failure(error)) => {
                info!("MockProvider: Failing {} with {}", url, error);
                Err(error.clone())
            }
            Some(MockAsset::Delayed(delay, body)) => {
                info!("MockProvider: Delaying {} by {:?}", url, delay);
                tokio::time::sleep(*delay).await;
                Ok(body.clone())
            }
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
