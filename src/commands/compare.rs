use crate::config::DisplayConfig;
use crate::formatting::{format_color, format_header};
use crate::resolver::ColorResolver;
use crate::teams::team_abbreviation;
use crate::types::{BrandColor, Strategy, TeamId};
use anyhow::Result;

/// Colors from every strategy for one team
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub id: TeamId,
    pub declared: BrandColor,
    pub sampled: BrandColor,
    pub center: BrandColor,
    pub feed: BrandColor,
}

impl Comparison {
    /// RGB distance between the declared and sampled colors
    pub fn drift(&self) -> f64 {
        self.declared.distance(&self.sampled)
    }
}

pub async fn compare(resolver: &ColorResolver, id: TeamId) -> Comparison {
    let (sampled, center, feed) = tokio::join!(
        resolver.resolve_color(id, Strategy::Sampled),
        resolver.resolve_color(id, Strategy::CenterPixel),
        resolver.resolve_color(id, Strategy::Feed),
    );
    Comparison {
        id,
        declared: resolver.lookup_declared_color(id),
        sampled,
        center,
        feed,
    }
}

pub fn format_comparison(comparison: &Comparison, display: &DisplayConfig) -> String {
    let mut output = String::new();
    let title = format!("{} ({}) color sources", team_abbreviation(comparison.id), comparison.id);
    output.push_str(&format_header(&title, true, display));

    let rows = [
        ("Declared", comparison.declared),
        ("Sampled", comparison.sampled),
        ("Center", comparison.center),
        ("Feed", comparison.feed),
    ];
    for (label, color) in rows {
        output.push_str(&format!("{:<10} {}\n", label, format_color(color, display)));
    }
    output.push_str(&format!("{:<10} {:.1}\n", "Drift", comparison.drift()));
    output
}

pub async fn run(resolver: &ColorResolver, id: TeamId, display: &DisplayConfig) -> Result<()> {
    let comparison = compare(resolver, id).await;
    print!("{}", format_comparison(&comparison, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_provider::MockProvider;
    use crate::formatting::BoxChars;
    use crate::resolver::ResolverSettings;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_compare_with_declared_spots() {
        let template = "mock://compare/{team_id}.png";
        let settings = ResolverSettings {
            spot_url_template: template.to_string(),
            branding_url: "mock://compare/missing-branding.json".to_string(),
            ..Default::default()
        };
        let provider = MockProvider::new().with_declared_spots(template);
        let resolver = ColorResolver::new(Arc::new(provider), settings);

        let comparison = compare(&resolver, TeamId(119)).await;
        assert_eq!(comparison.declared.to_hex(), "#005a9c");
        assert_eq!(comparison.sampled, comparison.declared);
        assert_eq!(comparison.center, comparison.declared);
        assert_eq!(comparison.feed, BrandColor::SENTINEL);
        assert_eq!(comparison.drift(), 0.0);
    }

    #[test]
    fn test_format_comparison() {
        let display = DisplayConfig {
            use_unicode: false,
            show_swatches: false,
            box_chars: BoxChars::ascii(),
        };
        let comparison = Comparison {
            id: TeamId(147),
            declared: BrandColor::from_rgb(0x132448),
            sampled: BrandColor::from_rgb(0x132448),
            center: BrandColor::from_rgb(0x132448),
            feed: BrandColor::SENTINEL,
        };
        let output = format_comparison(&comparison, &display);
        assert!(output.starts_with("NYY (147) color sources\n"));
        assert!(output.contains("Feed       #666666\n"));
        assert!(output.ends_with("Drift      0.0\n"));
    }
}
