use super::*;

helix_endpoints! {
    search_categories(SearchCategories) => GET "search/categories" {
        query {
            query: String,
            first: Option<u32>,
            after: Option<String>,
        }
    }

    search_channels(SearchChannels) => GET "search/channels" {
        query {
            query: String,
            first: Option<u32>,
            after: Option<String>,
            live_only: Option<bool>,
        }
    }
}
