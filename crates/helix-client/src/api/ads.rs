use super::*;

helix_endpoints! {
    /// Start a commercial on the broadcaster's channel.
    start_commercial(StartCommercial) => POST "channels/commercial" {
        query {}
        body { broadcaster_id: String, length: u32 }
    }
}
