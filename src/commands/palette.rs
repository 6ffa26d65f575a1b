use crate::config::DisplayConfig;
use crate::formatting::{format_color, format_header};
use crate::resolver::ColorResolver;
use crate::teams::{all_teams, TeamInfo};
use crate::types::{BrandColor, Strategy};
use anyhow::Result;
use futures::future::join_all;

/// Resolve every team in the reference table concurrently, in table order
pub async fn resolve_all(
    resolver: &ColorResolver,
    strategy: Strategy,
) -> Vec<(&'static TeamInfo, BrandColor)> {
    let fetch_futures = all_teams().iter().map(|team| async move {
        let color = resolver.resolve_color(team.id, strategy).await;
        (team, color)
    });
    join_all(fetch_futures).await
}

pub fn format_palette(
    strategy: Strategy,
    colors: &[(&'static TeamInfo, BrandColor)],
    sentinel: BrandColor,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();
    output.push_str(&format_header(&format!("Palette ({})", strategy), true, display));

    for (team, color) in colors {
        let marker = if *color != team.spot_color { "*" } else { "" };
        output.push_str(&format!(
            "{:<5} {:<5} {}{}\n",
            team.id,
            team.abbreviation,
            format_color(*color, display),
            marker
        ));
    }

    let fallbacks = colors.iter().filter(|(_, c)| *c == sentinel).count();
    output.push_str(&format!(
        "\n{} teams, {} differ from the declared table (*), {} fell back to {}\n",
        colors.len(),
        colors.iter().filter(|(t, c)| *c != t.spot_color).count(),
        fallbacks,
        sentinel
    ));
    output
}

pub async fn run(resolver: &ColorResolver, strategy: Strategy, display: &DisplayConfig) -> Result<()> {
    let colors = resolve_all(resolver, strategy).await;
    print!(
        "{}",
        format_palette(strategy, &colors, resolver.settings().sentinel, display)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_provider::MockProvider;
    use crate::formatting::BoxChars;
    use crate::resolver::ResolverSettings;
    use std::sync::Arc;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            show_swatches: false,
            box_chars: BoxChars::ascii(),
        }
    }

    #[tokio::test]
    async fn test_sampled_palette_matches_declared() {
        let template = "mock://palette/{team_id}.png";
        let settings = ResolverSettings {
            spot_url_template: template.to_string(),
            ..Default::default()
        };
        let resolver = ColorResolver::new(
            Arc::new(MockProvider::new().with_declared_spots(template)),
            settings,
        );

        let colors = resolve_all(&resolver, Strategy::Sampled).await;
        assert_eq!(colors.len(), 32);
        for (team, color) in &colors {
            assert_eq!(*color, team.spot_color, "{}", team.name);
        }

        let output = format_palette(Strategy::Sampled, &colors, BrandColor::SENTINEL, &plain());
        assert!(output.contains("147   NYY   #132448\n"));
        assert!(output.contains("32 teams, 0 differ from the declared table (*), 0 fell back to #666666"));
    }

    #[tokio::test]
    async fn test_palette_with_unreachable_images() {
        let settings = ResolverSettings {
            spot_url_template: "mock://palette-missing/{team_id}.png".to_string(),
            ..Default::default()
        };
        let resolver = ColorResolver::new(Arc::new(MockProvider::new()), settings);

        let colors = resolve_all(&resolver, Strategy::Sampled).await;
        assert!(colors.iter().all(|(_, c)| *c == BrandColor::SENTINEL));

        let output = format_palette(Strategy::Sampled, &colors, BrandColor::SENTINEL, &plain());
        assert!(output.contains("147   NYY   #666666*\n"));
        assert!(output.contains("32 teams, 32 differ from the declared table (*), 32 fell back to #666666"));
    }
}
