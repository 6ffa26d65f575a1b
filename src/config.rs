use crate::branding::DEFAULT_BRANDING_URL;
use crate::formatting::BoxChars;
use crate::sampling::DEFAULT_ALPHA_THRESHOLD;
use crate::types::{BrandColor, Strategy};
use crate::urls::DEFAULT_SPOT_URL_TEMPLATE;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Color returned whenever a strategy has nothing to offer
    pub sentinel: BrandColor,
    /// Pixels at or below this alpha are ignored when sampling
    pub alpha_threshold: u8,
    pub spot_url_template: String,
    pub branding_url: String,
    pub request_timeout_secs: u64,
    pub default_strategy: Strategy,
    pub sample_cache_lifespan_secs: u64,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub show_swatches: bool,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            sentinel: BrandColor::SENTINEL,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            spot_url_template: DEFAULT_SPOT_URL_TEMPLATE.to_string(),
            branding_url: DEFAULT_BRANDING_URL.to_string(),
            request_timeout_secs: 10,
            default_strategy: Strategy::Declared,
            sample_cache_lifespan_secs: 3600,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            show_swatches: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse TOML, deriving the fields that are not read from the file
    pub fn from_toml(content: &str) -> Result<Config, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
        Ok(config)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    Config::from_toml(&content).unwrap_or_else(|e| {
        warn!("Ignoring malformed config {}: {}", config_path.display(), e);
        Config::default()
    })
}
