/// URL templates for team assets on the MLB photos CDN
use crate::types::TeamId;

/// Placeholder replaced with the numeric team id
pub const TEAM_ID_PLACEHOLDER: &str = "{team_id}";

/// 200px solid spot image, the input for color sampling
pub const DEFAULT_SPOT_URL_TEMPLATE: &str =
    "https://img.mlbstatic.com/mlb-photos/image/upload/w_200,f_png,q_auto/v1/team/{team_id}/fill/spot";

const PHOTOS_BASE: &str = "https://img.mlbstatic.com/mlb-photos/image/upload";

/// Substitute every `{team_id}` in `template`
pub fn expand_template(template: &str, id: TeamId) -> String {
    template.replace(TEAM_ID_PLACEHOLDER, &id.to_string())
}

/// Current spot logo at the given width
pub fn spot_logo_url(id: TeamId, width: u32) -> String {
    format!("{}/w_{},f_png,q_auto/v1/team/{}/logo/spot/current", PHOTOS_BASE, width, id)
}

/// Dark inactive cap logo at the given width
pub fn cap_logo_url(id: TeamId, width: u32) -> String {
    format!("{}/w_{},f_png,q_auto/v1/team/{}/logo/cap/dark/inactive", PHOTOS_BASE, width, id)
}
