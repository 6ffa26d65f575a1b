//! Team color resolution
//!
//! `ColorResolver` answers "which color represents this team" through one of
//! several explicitly chosen strategies. The declared table is synchronous and
//! authoritative; the image and feed strategies are best-effort network
//! lookups that fold every failure into the configured sentinel color.

use crate::cache;
use crate::config::Config;
use crate::data_provider::AssetProvider;
use crate::error::{FeedError, FetchError, SampleError};
use crate::sampling::{SampleMode, DEFAULT_ALPHA_THRESHOLD};
use crate::teams;
use crate::types::{BrandColor, Strategy, TeamId};
use crate::urls;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub sentinel: BrandColor,
    pub alpha_threshold: u8,
    pub spot_url_template: String,
    pub branding_url: String,
    pub request_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        ResolverSettings {
            sentinel: BrandColor::SENTINEL,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            spot_url_template: urls::DEFAULT_SPOT_URL_TEMPLATE.to_string(),
            branding_url: crate::branding::DEFAULT_BRANDING_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&Config> for ResolverSettings {
    fn from(config: &Config) -> Self {
        ResolverSettings {
            sentinel: config.sentinel,
            alpha_threshold: config.alpha_threshold,
            spot_url_template: config.spot_url_template.clone(),
            branding_url: config.branding_url.clone(),
            request_timeout: config.request_timeout(),
        }
    }
}

#[derive(Clone)]
pub struct ColorResolver {
    provider: Arc<dyn AssetProvider>,
    settings: ResolverSettings,
}

impl ColorResolver {
    pub fn new(provider: Arc<dyn AssetProvider>, settings: ResolverSettings) -> Self {
        ColorResolver { provider, settings }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Declared table color, or the sentinel for unknown ids. Never fails.
    pub fn lookup_declared_color(&self, id: TeamId) -> BrandColor {
        teams::declared_color(id).unwrap_or(self.settings.sentinel)
    }

    /// Mean color of the team's spot image at `image_url` (a `{team_id}` template)
    ///
    /// Resolves exactly once and never fails: fetch, decode and empty-image
    /// failures all yield the sentinel.
    pub async fn sample_color_from_image(&self, id: TeamId, image_url: &str) -> BrandColor {
        let token = CancellationToken::new();
        self.sample_color_cancellable(id, image_url, SampleMode::Average, &token)
            .await
    }

    /// Like `sample_color_from_image`, stopping early once `token` is cancelled
    pub async fn sample_color_cancellable(
        &self,
        id: TeamId,
        image_url: &str,
        mode: SampleMode,
        token: &CancellationToken,
    ) -> BrandColor {
        match self.try_sample_color(id, image_url, mode, token).await {
            Ok(color) => color,
            Err(SampleError::Cancelled) => {
                debug!("Sampling for team {} cancelled", id);
                self.settings.sentinel
            }
            Err(e) => {
                warn!("Sampling for team {} fell back to sentinel: {}", id, e);
                self.settings.sentinel
            }
        }
    }

    /// Sample with the failure reason preserved
    pub async fn try_sample_color(
        &self,
        id: TeamId,
        image_url: &str,
        mode: SampleMode,
        token: &CancellationToken,
    ) -> Result<BrandColor, SampleError> {
        let url = urls::expand_template(image_url, id);
        let fetch = cache::fetch_sample_cached(
            self.provider.as_ref(),
            &url,
            mode,
            self.settings.alpha_threshold,
        );

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(SampleError::Cancelled),
            result = tokio::time::timeout(self.settings.request_timeout, fetch) => {
                match result {
                    Ok(sampled) => sampled,
                    Err(_) => Err(FetchError::Timeout { url: url.clone() }.into()),
                }
            }
        }
    }

    /// `primaryLight` from the branding feed, with the failure reason preserved
    ///
    /// `Ok(None)` means the feed loaded but has no usable color for the team.
    pub async fn try_feed_color(&self, id: TeamId) -> Result<Option<BrandColor>, FeedError> {
        let url = &self.settings.branding_url;
        let fetch = cache::fetch_branding_cached(self.provider.as_ref(), url);
        let feed = tokio::time::timeout(self.settings.request_timeout, fetch)
            .await
            .map_err(|_| FetchError::Timeout { url: url.clone() })??;
        Ok(feed.feed_color(id))
    }

    /// Branding feed color, or the sentinel. Never fails.
    pub async fn feed_color(&self, id: TeamId) -> BrandColor {
        match self.try_feed_color(id).await {
            Ok(Some(color)) => color,
            Ok(None) => {
                debug!("Branding feed has no color for team {}", id);
                self.settings.sentinel
            }
            Err(e) => {
                warn!("Branding feed lookup for team {} fell back to sentinel: {}", id, e);
                self.settings.sentinel
            }
        }
    }

    /// Resolve with an explicitly chosen strategy. Never fails.
    ///
    /// Image strategies use the configured spot URL template.
    pub async fn resolve_color(&self, id: TeamId, strategy: Strategy) -> BrandColor {
        let token = CancellationToken::new();
        self.resolve_color_cancellable(id, strategy, &token).await
    }

    pub async fn resolve_color_cancellable(
        &self,
        id: TeamId,
        strategy: Strategy,
        token: &CancellationToken,
    ) -> BrandColor {
        debug!("Resolving team {} with {} strategy", id, strategy);
        let template = &self.settings.spot_url_template;
        match strategy {
            Strategy::Declared => self.lookup_declared_color(id),
            Strategy::Sampled => {
                self.sample_color_cancellable(id, template, SampleMode::Average, token)
                    .await
            }
            Strategy::CenterPixel => {
                self.sample_color_cancellable(id, template, SampleMode::CenterPixel, token)
                    .await
            }
            Strategy::Feed => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => self.settings.sentinel,
                    color = self.feed_color(id) => color,
                }
            }
        }
    }
}
