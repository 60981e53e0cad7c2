use super::*;

helix_endpoints! {
    /// Get channel information for a broadcaster.
    get_channel_information(GetChannelInformation) => GET "channels" {
        query { broadcaster_id: String }
    }

    /// Update title, category, language or stream delay.
    modify_channel_information(ModifyChannelInformation) => PATCH "channels" {
        query { broadcaster_id: String }
        body {
            game_id: Option<String>,
            broadcaster_language: Option<String>,
            title: Option<String>,
            delay: Option<u32>,
        }
    }

    /// List users with editor rights on the channel.
    get_channel_editors(GetChannelEditors) => GET "channels/editors" {
        query { broadcaster_id: String }
    }

    /// Get one page of channels followed by a user.
    get_followed_channels(GetFollowedChannels) => GET "channels/followed" {
        query {
            user_id: String,
            broadcaster_id: Option<String>,
            first: Option<u32>,
            after: Option<String>,
        }
    }
}
