use crate::config::DisplayConfig;
use crate::formatting::{format_color, format_header};
use crate::resolver::ColorResolver;
use crate::sampling::SampleMode;
use crate::teams::{team_abbreviation, team_info};
use crate::types::{BrandColor, Strategy, TeamId};
use crate::urls;
use anyhow::Result;
use tokio_util::sync::CancellationToken;

pub fn format_color_report(
    id: TeamId,
    strategy: Strategy,
    color: BrandColor,
    sentinel: BrandColor,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();

    let title = match team_info(id) {
        Some(team) => format!("{} ({}, {})", team.name, team.abbreviation, id),
        None => format!("Team {} ({})", id, team_abbreviation(id)),
    };
    output.push_str(&format_header(&title, true, display));
    output.push_str(&format!("{:<10} {}\n", "Strategy:", strategy));
    output.push_str(&format!("{:<10} {}\n", "Color:", format_color(color, display)));
    if color == sentinel {
        output.push_str("           (no color available, showing fallback)\n");
    }
    output.push_str(&format!("{:<10} {}\n", "Spot logo:", urls::spot_logo_url(id, 200)));
    output.push_str(&format!("{:<10} {}\n", "Cap logo:", urls::cap_logo_url(id, 200)));
    output
}

/// Resolve one team's color. A `url` template overrides the configured one
/// for the image strategies.
pub async fn run(
    resolver: &ColorResolver,
    id: TeamId,
    strategy: Strategy,
    url: Option<String>,
    display: &DisplayConfig,
) -> Result<()> {
    let color = match (strategy, url) {
        (Strategy::Sampled, Some(template)) => {
            resolver.sample_color_from_image(id, &template).await
        }
        (Strategy::CenterPixel, Some(template)) => {
            let token = CancellationToken::new();
            resolver
                .sample_color_cancellable(id, &template, SampleMode::CenterPixel, &token)
                .await
        }
        (strategy, _) => resolver.resolve_color(id, strategy).await,
    };

    print!(
        "{}",
        format_color_report(id, strategy, color, resolver.settings().sentinel, display)
    );
    Ok(())
}
