use super::*;

helix_endpoints! {
    /// Get users by ID and/or login. With neither, the token's own user.
    get_users(GetUsers) => GET "users" {
        query { id: Option<Vec<String>>, login: Option<Vec<String>> }
    }

    update_user(UpdateUser) => PUT "users" {
        query { description: Option<String> }
    }

    get_users_follows(GetUsersFollows) => GET "users/follows" {
        query {
            after: Option<String>,
            first: Option<u32>,
            from_id: Option<String>,
            to_id: Option<String>,
        }
    }

    get_user_block_list(GetUserBlockList) => GET "users/blocks" {
        query {
            broadcaster_id: String,
            first: Option<u32>,
            after: Option<String>,
        }
    }

    block_user(BlockUser) => PUT "users/blocks" {
        query {
            target_user_id: String,
            source_context: Option<String>,
            reason: Option<String>,
        }
    }

    unblock_user(UnblockUser) => DELETE "users/blocks" {
        query { target_user_id: String }
    }

    get_user_extensions(GetUserExtensions) => GET "users/extensions/list" {
        query {}
    }

    get_user_active_extensions(GetUserActiveExtensions) => GET "users/extensions" {
        query { user_id: Option<String> }
    }

    /// Install or activate extensions. `data` is passed through as-is.
    update_user_extensions(UpdateUserExtensions) => PUT "users/extensions" {
        query {}
        body { data: Option<Value> }
    }
}
