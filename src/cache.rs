use crate::branding::BrandingFeed;
use crate::data_provider::AssetProvider;
use crate::error::{FeedError, SampleError};
use crate::sampling::{self, SampleMode};
use crate::types::BrandColor;
use cached::proc_macro::cached;
use tracing::debug;

pub use cached::Cached;

#[cfg(test)]
pub async fn clear_all_caches() {
    SAMPLE_CACHE.lock().await.cache_clear();
    BRANDING_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
#[derive(Debug)]
pub struct CacheStats {
    pub sample_entries: usize,
    pub branding_entries: usize,
}

#[cfg(test)]
pub async fn cache_stats() -> CacheStats {
    CacheStats {
        sample_entries: SAMPLE_CACHE.lock().await.cache_size(),
        branding_entries: BRANDING_CACHE.lock().await.cache_size(),
    }
}

/// Apply the configured lifespan to every cache
pub async fn set_cache_lifespan(seconds: u64) {
    SAMPLE_CACHE.lock().await.cache_set_lifespan(seconds);
    BRANDING_CACHE.lock().await.cache_set_lifespan(seconds);
}

fn sample_key(url: &str, mode: SampleMode, alpha_threshold: u8) -> String {
    format!("{}|{}|{}", mode, alpha_threshold, url)
}

/// Fetch, decode and sample a spot image. Only successful samples are cached.
#[cached(
    name = "SAMPLE_CACHE",
    type = "cached::TimedSizedCache<String, BrandColor>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(128, 3600) }",
    convert = r#"{ sample_key(url, mode, alpha_threshold) }"#,
    result = true
)]
pub async fn fetch_sample_cached(
    provider: &dyn AssetProvider,
    url: &str,
    mode: SampleMode,
    alpha_threshold: u8,
) -> Result<BrandColor, SampleError> {
    let bytes = provider.fetch_bytes(url).await?;
    let color = sampling::sample_bytes(&bytes, mode, alpha_threshold)?;
    debug!("Sampled {} from {} ({})", color, url, mode);
    Ok(color)
}

#[cached(
    name = "BRANDING_CACHE",
    type = "cached::TimedSizedCache<String, BrandingFeed>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(4, 3600) }",
    convert = r#"{ url.to_string() }"#,
    result = true
)]
pub async fn fetch_branding_cached(
    provider: &dyn AssetProvider,
    url: &str,
) -> Result<BrandingFeed, FeedError> {
    let bytes = provider.fetch_bytes(url).await?;
    let feed = BrandingFeed::parse(&bytes)?;
    debug!("Loaded branding feed with {} teams from {}", feed.teams.len(), url);
    Ok(feed)
}

pub async fn refresh_sample(
    provider: &dyn AssetProvider,
    url: &str,
    mode: SampleMode,
    alpha_threshold: u8,
) -> Result<BrandColor, SampleError> {
    let key = sample_key(url, mode, alpha_threshold);
    SAMPLE_CACHE.lock().await.cache_remove(&key);
    fetch_sample_cached(provider, url, mode, alpha_threshold).await
}

pub async fn refresh_branding(
    provider: &dyn AssetProvider,
    url: &str,
) -> Result<BrandingFeed, FeedError> {
    let key = url.to_string();
    BRANDING_CACHE.lock().await.cache_remove(&key);
    fetch_branding_cached(provider, url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_provider::MockProvider;
    use crate::error::FetchError;
    use crate::fixtures::{self, BLUE, CLEAR, RED};

    // The caches are process-wide, so every test uses its own URLs and only
    // asserts on counts it controls.

    #[tokio::test]
    async fn test_sample_is_cached() {
        let url = "mock://cache/sample-is-cached";
        let provider = MockProvider::new().with_asset(url, fixtures::png_from_pixels(2, 1, &[RED, BLUE]));

        let first = fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.unwrap();
        let second = fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.request_count(url), 1);
    }

    #[tokio::test]
    async fn test_mode_and_threshold_are_part_of_the_key() {
        let url = "mock://cache/key-parts";
        let provider = MockProvider::new().with_asset(url, fixtures::png_from_pixels(2, 1, &[RED, BLUE]));

        let _ = fetch_sample_cached(&provider, url, SampleMode::Average, 200).await;
        let _ = fetch_sample_cached(&provider, url, SampleMode::CenterPixel, 200).await;
        let _ = fetch_sample_cached(&provider, url, SampleMode::Average, 10).await;

        assert_eq!(provider.request_count(url), 3);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let url = "mock://cache/failure";
        let provider = MockProvider::new().with_failure(
            url,
            FetchError::Network {
                url: url.to_string(),
                message: "connection reset".to_string(),
            },
        );

        assert!(fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.is_err());
        assert!(fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.is_err());
        assert_eq!(provider.request_count(url), 2);
    }

    #[tokio::test]
    async fn test_empty_sample_is_not_cached() {
        let url = "mock://cache/transparent";
        let provider = MockProvider::new().with_asset(url, fixtures::png_from_pixels(1, 1, &[CLEAR]));

        let err = fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.unwrap_err();
        assert!(matches!(err, SampleError::Empty { .. }));
        let _ = fetch_sample_cached(&provider, url, SampleMode::Average, 200).await;
        assert_eq!(provider.request_count(url), 2);
    }

    #[tokio::test]
    async fn test_refresh_sample_refetches() {
        let url = "mock://cache/refresh-sample";
        let provider = MockProvider::new().with_asset(url, fixtures::png_from_pixels(1, 1, &[RED]));

        fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.unwrap();
        refresh_sample(&provider, url, SampleMode::Average, 200).await.unwrap();
        fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.unwrap();

        assert_eq!(provider.request_count(url), 2);
    }

    #[tokio::test]
    async fn test_branding_is_cached_and_refreshable() {
        let url = "mock://cache/branding.json";
        let provider = MockProvider::new().with_asset(url, fixtures::branding_json().as_bytes().to_vec());

        let feed = fetch_branding_cached(&provider, url).await.unwrap();
        assert_eq!(feed.teams.len(), 4);
        fetch_branding_cached(&provider, url).await.unwrap();
        assert_eq!(provider.request_count(url), 1);

        refresh_branding(&provider, url).await.unwrap();
        assert_eq!(provider.request_count(url), 2);
    }

    #[tokio::test]
    async fn test_branding_parse_error_is_not_cached() {
        let url = "mock://cache/bad-branding.json";
        let provider = MockProvider::new().with_asset(url, b"not json".to_vec());

        assert!(matches!(
            fetch_branding_cached(&provider, url).await,
            Err(FeedError::Parse(_))
        ));
        let _ = fetch_branding_cached(&provider, url).await;
        assert_eq!(provider.request_count(url), 2);
    }

    #[tokio::test]
    #[ignore] // Shared cache state - run individually
    async fn test_clear_all_caches() {
        let url = "mock://cache/clear";
        let provider = MockProvider::new().with_asset(url, fixtures::png_from_pixels(1, 1, &[RED]));

        fetch_sample_cached(&provider, url, SampleMode::Average, 200).await.unwrap();
        assert!(cache_stats().await.sample_entries > 0);

        clear_all_caches().await;

        let stats = cache_stats().await;
        assert_eq!(stats.sample_entries, 0);
        assert_eq!(stats.branding_entries, 0);
    }
}
