use crate::config::DisplayConfig;
use crate::formatting::{format_color, format_header, format_rule};
use crate::teams::{all_teams, divisions, teams_by_division, TeamInfo};
use crate::types::{Division, MLB_LEAGUE_ABBREV};
use anyhow::Result;

fn format_team_row(team: &TeamInfo, display: &DisplayConfig) -> String {
    format!(
        "{:<5} {:<24} {:<5} {}\n",
        team.id,
        team.name,
        team.abbreviation,
        format_color(team.spot_color, display)
    )
}

/// Reference table grouped by division, optionally restricted to one
pub fn format_teams(division: Option<Division>, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", format_header(&format!("{} Team Colors", MLB_LEAGUE_ABBREV), true, display)));

    let groups = match division {
        Some(d) => vec![d],
        None => divisions(),
    };

    for group in groups {
        output.push_str(&format_header(group.name(), false, display));
        output.push_str(&format!("{:<5} {:<24} {:<5} Spot Color\n", "ID", "Team", "Abbr"));
        output.push_str(&format!("{}\n", format_rule(48, display)));
        for team in teams_by_division(group) {
            output.push_str(&format_team_row(team, display));
        }
        output.push('\n');
    }

    if division.is_none() {
        output.push_str(&format!("{} teams\n", all_teams().len()));
    }
    output
}

pub fn run(division: Option<Division>, display: &DisplayConfig) -> Result<()> {
    print!("{}", format_teams(division, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::BoxChars;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            show_swatches: false,
            box_chars: BoxChars::ascii(),
        }
    }

    #[test]
    fn test_format_all_teams() {
        let output = format_teams(None, &plain());
        assert!(output.contains("MLB Team Colors\n===="));
        assert!(output.contains("AL East\n-------\n"));
        assert!(output.contains("147   New York Yankees         NYY   #132448\n"));
        assert!(output.contains("Additional\n"));
        assert!(output.ends_with("32 teams\n"));
    }

    #[test]
    fn test_format_single_division() {
        let output = format_teams(Some(Division::NlWest), &plain());
        assert!(output.contains("119   Los Angeles Dodgers      LAD   #005a9c\n"));
        assert!(!output.contains("AL East"));
        assert!(!output.contains("teams\n"));
    }
}
