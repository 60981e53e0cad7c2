use super::*;

helix_endpoints! {
    /// Raid another channel.
    start_raid(StartRaid) => POST "raids" {
        query { from_broadcaster_id: String, to_broadcaster_id: String }
    }

    cancel_raid(CancelRaid) => DELETE "raids" {
        query { broadcaster_id: String }
    }
}
