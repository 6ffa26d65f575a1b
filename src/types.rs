/// Shared types used across the application
///
/// This module contains the value types that flow between the reference
/// table, the samplers, the resolver and the command handlers.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Global constants
pub const MLB_LEAGUE_ABBREV: &str = "MLB";

/// Numeric MLB franchise identifier (e.g. 147 = New York Yankees)
///
/// Any integer is accepted. Unknown identifiers are expected and handled by
/// the lookups, never rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i32);

impl From<i32> for TeamId {
    fn from(id: i32) -> Self {
        TeamId(id)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color: {0}")]
pub struct ParseColorError(pub String);

/// A 24-bit RGB brand color, rendered canonically as lowercase `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrandColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrandColor {
    /// Mid-gray returned whenever no color is available for a team
    pub const SENTINEL: BrandColor = BrandColor::new(0x66, 0x66, 0x66);
    pub const BLACK: BrandColor = BrandColor::new(0, 0, 0);
    pub const WHITE: BrandColor = BrandColor::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        BrandColor { r, g, b }
    }

    /// Build from a packed `0xrrggbb` literal
    pub const fn from_rgb(rgb: u32) -> Self {
        BrandColor::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space, 0.0 for identical colors
    pub fn distance(&self, other: &BrandColor) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

/// Parse a color string
/// Supports:
/// - Hex colors: "#FF6600", "#f60" (the leading `#` is optional)
/// - RGB tuples: "255,165,0"
impl FromStr for BrandColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseColorError(s.to_string());

        if trimmed.contains(',') {
            let parts: Vec<&str> = trimmed.split(',').collect();
            if parts.len() != 3 {
                return Err(invalid());
            }
            let channel = |p: &str| p.trim().parse::<u8>().map_err(|_| invalid());
            return Ok(BrandColor::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?));
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(BrandColor::new(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| invalid())?;
                Ok(BrandColor::new(r, g, b))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for BrandColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BrandColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// League division a franchise plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    AlEast,
    AlCentral,
    AlWest,
    NlEast,
    NlCentral,
    NlWest,
    /// Placeholder entries used for expansion and all-star contexts
    Additional,
}

impl Division {
    pub const ALL: [Division; 7] = [
        Division::AlEast,
        Division::AlCentral,
        Division::AlWest,
        Division::NlEast,
        Division::NlCentral,
        Division::NlWest,
        Division::Additional,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Division::AlEast => "AL East",
            Division::AlCentral => "AL Central",
            Division::AlWest => "AL West",
            Division::NlEast => "NL East",
            Division::NlCentral => "NL Central",
            Division::NlWest => "NL West",
            Division::Additional => "Additional",
        }
    }

    /// American or National League, `None` for placeholder entries
    pub fn league(&self) -> Option<&'static str> {
        match self {
            Division::AlEast | Division::AlCentral | Division::AlWest => Some("American League"),
            Division::NlEast | Division::NlCentral | Division::NlWest => Some("National League"),
            Division::Additional => None,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts "AL East", "al-east", "ALEast" and so on
impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Division::ALL
            .into_iter()
            .find(|d| d.name().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown division '{}'", s))
    }
}

impl Serialize for Division {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// How a team's color is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Static reference table lookup
    #[default]
    Declared,
    /// Mean color of the opaque pixels of the team's spot image
    Sampled,
    /// Single pixel at the center of the team's spot image
    CenterPixel,
    /// `primaryLight` from the branding feed
    Feed,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Declared => "declared",
            Strategy::Sampled => "sampled",
            Strategy::CenterPixel => "center_pixel",
            Strategy::Feed => "feed",
        };
        f.pad(name)
    }
}
