use super::*;

helix_endpoints! {
    /// Get download URLs for extension analytics reports.
    get_extension_analytics(GetExtensionAnalytics) => GET "analytics/extensions" {
        query {
            after: Option<String>,
            ended_at: Option<String>,
            extension_id: Option<String>,
            first: Option<u32>,
            started_at: Option<String>,
            kind as "type": Option<String>,
        }
    }

    /// Get download URLs for game analytics reports.
    get_game_analytics(GetGameAnalytics) => GET "analytics/games" {
        query {
            after: Option<String>,
            ended_at: Option<String>,
            first: Option<u32>,
            game_id: Option<String>,
            started_at: Option<String>,
            kind as "type": Option<String>,
        }
    }
}
