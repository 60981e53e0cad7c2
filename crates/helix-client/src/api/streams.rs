use super::*;

helix_endpoints! {
    get_stream_key(GetStreamKey) => GET "streams/key" {
        query { broadcaster_id: String }
    }

    /// Get live streams, filtered by user, game or language.
    get_streams(GetStreams) => GET "streams" {
        query {
            after: Option<String>,
            before: Option<String>,
            first: Option<u32>,
            game_id: Option<Vec<String>>,
            language: Option<Vec<String>>,
            user_id: Option<Vec<String>>,
            user_login: Option<Vec<String>>,
        }
    }

    get_followed_streams(GetFollowedStreams) => GET "streams/followed" {
        query {
            user_id: String,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    create_stream_marker(CreateStreamMarker) => POST "streams/markers" {
        query {}
        body { user_id: String, description: Option<String> }
    }

    get_stream_markers(GetStreamMarkers) => GET "streams/markers" {
        query {
            user_id: Option<String>,
            video_id: Option<String>,
            after: Option<String>,
            before: Option<String>,
            first: Option<u32>,
        }
    }
}
