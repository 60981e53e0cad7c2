use super::*;

helix_endpoints! {
    /// Get the broadcaster's active creator goals.
    get_creator_goals(GetCreatorGoals) => GET "goals" {
        query { broadcaster_id: String }
    }

    get_hype_train_events(GetHypeTrainEvents) => GET "hypetrain/events" {
        query {
            broadcaster_id: String,
            first: Option<u32>,
            id: Option<String>,
            cursor: Option<String>,
        }
    }
}
