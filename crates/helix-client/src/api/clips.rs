use super::*;

helix_endpoints! {
    /// Create a clip from the broadcaster's live stream.
    create_clip(CreateClip) => POST "clips" {
        query { broadcaster_id: String, has_delay: Option<bool> }
    }

    /// Get clips by broadcaster, game or clip IDs.
    get_clips(GetClips) => GET "clips" {
        query {
            broadcaster_id: Option<String>,
            game_id: Option<String>,
            id: Option<Vec<String>>,
            after: Option<String>,
            before: Option<String>,
            ended_at: Option<String>,
            first: Option<u32>,
            started_at: Option<String>,
        }
    }
}
