/// The at-bat branding feed (`branding.json`)
///
/// Only the parts used for color resolution are modeled; every other field in
/// the feed is ignored.
use crate::error::FeedError;
use crate::types::{BrandColor, TeamId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BRANDING_URL: &str =
    "https://storage.mobile.mlbinfra.com/atbatconfig/branding.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandingFeed {
    /// Entries that fail to deserialize are dropped so one bad team cannot
    /// hide the others
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub teams: Vec<TeamBranding>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamBranding {
    #[serde(rename = "teamID", deserialize_with = "deserialize_team_id")]
    pub team_id: TeamId,
    #[serde(rename = "teamColors", default, deserialize_with = "deserialize_lenient")]
    pub team_colors: Option<TeamColors>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamColors {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub primary_light: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub primary_dark: Option<String>,
}

impl TeamColors {
    pub fn primary(&self) -> Option<BrandColor> {
        parse_optional(&self.primary)
    }

    pub fn primary_light(&self) -> Option<BrandColor> {
        parse_optional(&self.primary_light)
    }

    pub fn primary_dark(&self) -> Option<BrandColor> {
        parse_optional(&self.primary_dark)
    }
}

fn parse_optional(value: &Option<String>) -> Option<BrandColor> {
    value.as_deref().and_then(|s| s.parse().ok())
}

/// `None` for values of the wrong shape instead of a parse failure
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping branding entry: {}", e);
                None
            }
        })
        .collect())
}

/// Team ids show up both as numbers and as numeric strings
fn deserialize_team_id<'de, D>(deserializer: D) -> Result<TeamId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(TeamId(n)),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map(TeamId)
            .map_err(|_| serde::de::Error::custom(format!("Invalid teamID: {}", s))),
    }
}

impl BrandingFeed {
    pub fn parse(bytes: &[u8]) -> Result<Self, FeedError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn team(&self, id: TeamId) -> Option<&TeamBranding> {
        self.teams.iter().find(|t| t.team_id == id)
    }

    pub fn team_colors(&self, id: TeamId) -> Option<&TeamColors> {
        self.team(id).and_then(|t| t.team_colors.as_ref())
    }

    /// `primaryLight` for the team, when present and a valid color
    pub fn feed_color(&self, id: TeamId) -> Option<BrandColor> {
        self.team_colors(id).and_then(TeamColors::primary_light)
    }
}

/// Background color to place behind a logo variant
///
/// Light variants sit on the dark primary, everything else on the light
/// primary. Falls back to `primary`, then black (light variants) or white.
/// No colors at all means black.
pub fn logo_background(colors: Option<&TeamColors>, variant_key: &str) -> BrandColor {
    let Some(colors) = colors else {
        return BrandColor::BLACK;
    };

    if variant_key.contains("Light") {
        colors
            .primary_dark()
            .or_else(|| colors.primary())
            .unwrap_or(BrandColor::BLACK)
    } else {
        colors
            .primary_light()
            .or_else(|| colors.primary())
            .unwrap_or(BrandColor::WHITE)
    }
}
