pub mod color;
pub mod compare;
pub mod export;
pub mod palette;
pub mod teams;
pub mod validate;

use crate::teams::team_id_by_abbreviation;
use crate::types::TeamId;
use anyhow::{bail, Result};

/// Parse a team argument: a numeric id ("147") or an abbreviation ("NYY")
///
/// Numeric ids are accepted even when they are not in the reference table, so
/// the caller sees the sentinel rather than an error.
pub fn parse_team(arg: &str) -> Result<TeamId> {
    let trimmed = arg.trim();
    if let Ok(id) = trimmed.parse::<i32>() {
        return Ok(TeamId(id));
    }
    match team_id_by_abbreviation(trimmed) {
        Some(id) => Ok(id),
        None => bail!("Unknown team '{}'. Use a numeric team id or an abbreviation like NYY", arg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_numeric() {
        assert_eq!(parse_team("147").unwrap(), TeamId(147));
        assert_eq!(parse_team(" -3 ").unwrap(), TeamId(-3));
        assert_eq!(parse_team("999").unwrap(), TeamId(999));
    }

    #[test]
    fn test_parse_team_abbreviation() {
        assert_eq!(parse_team("nyy").unwrap(), TeamId(147));
        assert_eq!(parse_team("WAS").unwrap(), TeamId(120));
    }

    #[test]
    fn test_parse_team_unknown() {
        let err = parse_team("Yankees").unwrap_err();
        assert!(err.to_string().contains("Unknown team 'Yankees'"));
    }
}
