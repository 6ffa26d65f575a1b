use thiserror::Error;

/// Failure to retrieve a remote asset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} timed out")]
    Timeout { url: String },
}

impl FetchError {
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            FetchError::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Why an image sample produced no color
#[derive(Error, Debug)]
pub enum SampleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("No pixel above alpha threshold {alpha_threshold}")]
    Empty { alpha_threshold: u8 },

    #[error("Sampling cancelled")]
    Cancelled,
}

/// Failure to load the branding feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to parse branding feed: {0}")]
    Parse(#[from] serde_json::Error),
}
