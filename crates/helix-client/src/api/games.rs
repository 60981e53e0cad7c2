use super::*;

helix_endpoints! {
    get_top_games(GetTopGames) => GET "games/top" {
        query {
            after: Option<String>,
            before: Option<String>,
            first: Option<u32>,
        }
    }

    /// Get games by ID or exact name.
    get_games(GetGames) => GET "games" {
        query { id: Option<Vec<String>>, name: Option<Vec<String>> }
    }

    get_bits_leaderboard(GetBitsLeaderboard) => GET "bits/leaderboard" {
        query {
            count: Option<u32>,
            period: Option<String>,
            started_at: Option<String>,
            user_id: Option<String>,
        }
    }

    get_cheermotes(GetCheermotes) => GET "bits/cheermotes" {
        query { broadcaster_id: Option<String> }
    }
}
