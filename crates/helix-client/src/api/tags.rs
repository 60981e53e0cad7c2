use super::*;

helix_endpoints! {
    get_all_stream_tags(GetAllStreamTags) => GET "tags/streams" {
        query {
            after: Option<String>,
            first: Option<u32>,
            tag_id: Option<Vec<String>>,
        }
    }

    get_stream_tags(GetStreamTags) => GET "streams/tags" {
        query { broadcaster_id: String }
    }

    /// Replace the channel's stream tags; unset `tag_ids` clears them.
    replace_stream_tags(ReplaceStreamTags) => PUT "streams/tags" {
        query { broadcaster_id: String }
        body { tag_ids: Option<Vec<String>> }
    }
}
