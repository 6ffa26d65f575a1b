/// Declared team reference table
///
/// One entry per known MLB franchise (plus two placeholder ids used in
/// expansion and all-star contexts), with the official spot color used behind
/// team logos. The table is static process-wide data and never changes at
/// runtime.
use crate::types::{BrandColor, Division, TeamId};
use phf::phf_map;
use serde::Serialize;
use std::collections::HashSet;

/// Abbreviation reported for ids that are not in the table
pub const UNKNOWN_ABBREV: &str = "UNK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamInfo {
    #[serde(rename = "teamId")]
    pub id: TeamId,
    #[serde(rename = "teamName")]
    pub name: &'static str,
    pub abbreviation: &'static str,
    #[serde(rename = "spotColor")]
    pub spot_color: BrandColor,
    pub division: Division,
}

const fn team(
    id: i32,
    name: &'static str,
    abbreviation: &'static str,
    spot_color: u32,
    division: Division,
) -> TeamInfo {
    TeamInfo {
        id: TeamId(id),
        name,
        abbreviation,
        spot_color: BrandColor::from_rgb(spot_color),
        division,
    }
}

static TEAMS: [TeamInfo; 32] = [
    team(110, "Baltimore Orioles", "BAL", 0xdf4601, Division::AlEast),
    team(111, "Boston Red Sox", "BOS", 0x0d2b56, Division::AlEast),
    team(147, "New York Yankees", "NYY", 0x132448, Division::AlEast),
    team(139, "Tampa Bay Rays", "TB", 0x8fbce6, Division::AlEast),
    team(141, "Toronto Blue Jays", "TOR", 0x134a8e, Division::AlEast),
    team(145, "Chicago White Sox", "CWS", 0x333333, Division::AlCentral),
    team(114, "Cleveland Guardians", "CLE", 0x002b5c, Division::AlCentral),
    team(116, "Detroit Tigers", "DET", 0x0c2c56, Division::AlCentral),
    team(118, "Kansas City Royals", "KC", 0x004687, Division::AlCentral),
    team(142, "Minnesota Twins", "MIN", 0x002b5c, Division::AlCentral),
    team(117, "Houston Astros", "HOU", 0xeb6e1f, Division::AlWest),
    team(108, "Los Angeles Angels", "LAA", 0x862633, Division::AlWest),
    team(133, "Oakland Athletics", "ATH", 0x003831, Division::AlWest),
    team(136, "Seattle Mariners", "SEA", 0x0c2c56, Division::AlWest),
    team(140, "Texas Rangers", "TEX", 0x003278, Division::AlWest),
    team(144, "Atlanta Braves", "ATL", 0x0c2340, Division::NlEast),
    team(146, "Miami Marlins", "MIA", 0x00a3e0, Division::NlEast),
    team(121, "New York Mets", "NYM", 0x002d72, Division::NlEast),
    team(143, "Philadelphia Phillies", "PHI", 0xe81828, Division::NlEast),
    team(120, "Washington Nationals", "WSH", 0xab0003, Division::NlEast),
    team(112, "Chicago Cubs", "CHC", 0x0e3386, Division::NlCentral),
    team(113, "Cincinnati Reds", "CIN", 0xc6011f, Division::NlCentral),
    team(158, "Milwaukee Brewers", "MIL", 0x13294b, Division::NlCentral),
    team(134, "Pittsburgh Pirates", "PIT", 0x333333, Division::NlCentral),
    team(138, "St. Louis Cardinals", "STL", 0xbe0a14, Division::NlCentral),
    team(109, "Arizona Diamondbacks", "AZ", 0xaa182c, Division::NlWest),
    team(115, "Colorado Rockies", "COL", 0x33006f, Division::NlWest),
    team(119, "Los Angeles Dodgers", "LAD", 0x005a9c, Division::NlWest),
    team(135, "San Diego Padres", "SD", 0xffc425, Division::NlWest),
    team(137, "San Francisco Giants", "SF", 0xfd5a1e, Division::NlWest),
    team(159, "Team 159", "T159", 0xbc0022, Division::Additional),
    team(160, "Team 160", "T160", 0x041e42, Division::Additional),
];

/// The 30 active franchises every complete table must cover
pub const EXPECTED_FRANCHISES: [i32; 30] = [
    110, 111, 147, 139, 141, // AL East
    145, 114, 116, 118, 142, // AL Central
    117, 108, 133, 136, 140, // AL West
    144, 146, 121, 143, 120, // NL East
    112, 113, 158, 134, 138, // NL Central
    109, 115, 119, 135, 137, // NL West
];

/// Abbreviations (including historical and alternate spellings) to team id
static TEAM_IDS_BY_ABBREV: phf::Map<&'static str, i32> = phf_map! {
    "BAL" => 110, "BOS" => 111, "NYY" => 147, "TB" => 139, "TBR" => 139, "TOR" => 141,
    "CWS" => 145, "CHW" => 145, "CLE" => 114, "DET" => 116, "KC" => 118, "KCR" => 118,
    "MIN" => 142, "HOU" => 117, "LAA" => 108, "ATH" => 133, "OAK" => 133, "SEA" => 136,
    "TEX" => 140, "ATL" => 144, "MIA" => 146, "NYM" => 121, "PHI" => 143, "WSH" => 120,
    "WAS" => 120, "CHC" => 112, "CIN" => 113, "MIL" => 158, "PIT" => 134, "STL" => 138,
    "AZ" => 109, "ARI" => 109, "COL" => 115, "LAD" => 119, "SD" => 135, "SDP" => 135,
    "SF" => 137, "SFG" => 137, "T159" => 159, "T160" => 160,
};

/// Declared spot color for a team, `None` when the id is not in the table
///
/// Jump-table lookup, kept separate from `TEAMS` so the hot path does not scan.
pub fn declared_color(id: TeamId) -> Option<BrandColor> {
    let rgb = match id.0 {
        110 => 0xdf4601,
        111 => 0x0d2b56,
        147 => 0x132448,
        139 => 0x8fbce6,
        141 => 0x134a8e,
        145 => 0x333333,
        114 => 0x002b5c,
        116 => 0x0c2c56,
        118 => 0x004687,
        142 => 0x002b5c,
        117 => 0xeb6e1f,
        108 => 0x862633,
        133 => 0x003831,
        136 => 0x0c2c56,
        140 => 0x003278,
        144 => 0x0c2340,
        146 => 0x00a3e0,
        121 => 0x002d72,
        143 => 0xe81828,
        120 => 0xab0003,
        112 => 0x0e3386,
        113 => 0xc6011f,
        158 => 0x13294b,
        134 => 0x333333,
        138 => 0xbe0a14,
        109 => 0xaa182c,
        115 => 0x33006f,
        119 => 0x005a9c,
        135 => 0xffc425,
        137 => 0xfd5a1e,
        159 => 0xbc0022,
        160 => 0x041e42,
        _ => return None,
    };
    Some(BrandColor::from_rgb(rgb))
}

/// Declared spot color for a team, or `BrandColor::SENTINEL` (`#666666`)
///
/// Total and pure: every `i32` maps to a valid color.
pub fn lookup_declared_color(id: TeamId) -> BrandColor {
    declared_color(id).unwrap_or(BrandColor::SENTINEL)
}

pub fn has_declared_color(id: TeamId) -> bool {
    declared_color(id).is_some()
}

/// All entries in division order
pub fn all_teams() -> &'static [TeamInfo] {
    &TEAMS
}

pub fn team_info(id: TeamId) -> Option<&'static TeamInfo> {
    TEAMS.iter().find(|t| t.id == id)
}

/// Team abbreviation, or `"UNK"` for ids that are not in the table
pub fn team_abbreviation(id: TeamId) -> &'static str {
    team_info(id).map_or(UNKNOWN_ABBREV, |t| t.abbreviation)
}

/// Case-insensitive abbreviation lookup ("nyy" -> 147)
pub fn team_id_by_abbreviation(abbrev: &str) -> Option<TeamId> {
    TEAM_IDS_BY_ABBREV
        .get(abbrev.trim().to_uppercase().as_str())
        .map(|id| TeamId(*id))
}

pub fn teams_by_division(division: Division) -> Vec<&'static TeamInfo> {
    TEAMS.iter().filter(|t| t.division == division).collect()
}

/// Divisions present in the table, in table order
pub fn divisions() -> Vec<Division> {
    let mut seen = Vec::new();
    for team in TEAMS.iter() {
        if !seen.contains(&team.division) {
            seen.push(team.division);
        }
    }
    seen
}

/// CSV export with a header row; names and divisions are quoted
pub fn export_csv() -> String {
    let mut output = String::from("Team ID,Team Name,Abbreviation,Spot Color,Division\n");
    let rows: Vec<String> = TEAMS
        .iter()
        .map(|t| {
            format!(
                "{},\"{}\",{},{},\"{}\"",
                t.id, t.name, t.abbreviation, t.spot_color, t.division
            )
        })
        .collect();
    output.push_str(&rows.join("\n"));
    output
}

/// Pretty-printed JSON array of every entry
pub fn export_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TEAMS[..])
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub total_expected: usize,
    pub total_defined: usize,
    /// Expected franchises with no declared color
    pub missing: Vec<TeamId>,
    /// Declared ids that are not among the expected franchises
    pub extra: Vec<TeamId>,
    pub duplicate_ids: Vec<TeamId>,
    pub duplicate_abbreviations: Vec<&'static str>,
    /// Entries whose reference color disagrees with `declared_color`
    pub inconsistent: Vec<TeamId>,
}

impl ValidationReport {
    /// Extra placeholder ids are informational and do not fail validation
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
            && self.duplicate_ids.is_empty()
            && self.duplicate_abbreviations.is_empty()
            && self.inconsistent.is_empty()
    }
}

/// Check the reference table against the expected franchise list
pub fn validate_table() -> ValidationReport {
    validate_entries(&TEAMS)
}

fn validate_entries(entries: &[TeamInfo]) -> ValidationReport {
    let mut report = ValidationReport {
        total_expected: EXPECTED_FRANCHISES.len(),
        total_defined: entries.len(),
        ..Default::default()
    };

    for id in EXPECTED_FRANCHISES {
        if !entries.iter().any(|t| t.id.0 == id) {
            report.missing.push(TeamId(id));
        }
    }

    let mut ids = HashSet::new();
    let mut abbrevs = HashSet::new();
    for entry in entries {
        if !EXPECTED_FRANCHISES.contains(&entry.id.0) {
            report.extra.push(entry.id);
        }
        if !ids.insert(entry.id) {
            report.duplicate_ids.push(entry.id);
        }
        if !abbrevs.insert(entry.abbreviation) {
            report.duplicate_abbreviations.push(entry.abbreviation);
        }
        if declared_color(entry.id) != Some(entry.spot_color) {
            report.inconsistent.push(entry.id);
        }
    }

    report
}
