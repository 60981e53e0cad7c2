use super::*;

helix_endpoints! {
    get_videos(GetVideos) => GET "videos" {
        query {
            id: Option<Vec<String>>,
            user_id: Option<String>,
            game_id: Option<String>,
            after: Option<String>,
            before: Option<String>,
            first: Option<u32>,
            language: Option<String>,
            period: Option<String>,
            sort: Option<String>,
            kind as "type": Option<String>,
        }
    }

    delete_videos(DeleteVideos) => DELETE "videos" {
        query { id: Vec<String> }
    }
}
