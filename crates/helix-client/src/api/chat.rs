use super::*;

helix_endpoints! {
    get_channel_emotes(GetChannelEmotes) => GET "chat/emotes" {
        query { broadcaster_id: String }
    }

    get_global_emotes(GetGlobalEmotes) => GET "chat/emotes/global" {
        query {}
    }

    get_emote_sets(GetEmoteSets) => GET "chat/emotes/set" {
        query { emote_set_id: Vec<String> }
    }

    get_channel_chat_badges(GetChannelChatBadges) => GET "chat/badges" {
        query { broadcaster_id: String }
    }

    get_global_chat_badges(GetGlobalChatBadges) => GET "chat/badges/global" {
        query {}
    }

    /// Get one page of users connected to the broadcaster's chat.
    get_chatters(GetChatters) => GET "chat/chatters" {
        query {
            broadcaster_id: String,
            moderator_id: String,
            first: Option<u32>,
            after: Option<String>,
        }
    }

    /// Get chat name colors for up to 100 users.
    get_user_chat_color(GetUserChatColor) => GET "chat/color" {
        query { user_id: Vec<String> }
    }

    /// Shout out another broadcaster in chat.
    send_shoutout(SendShoutout) => POST "chat/shoutouts" {
        query {
            from_broadcaster_id: String,
            to_broadcaster_id: String,
            moderator_id: String,
        }
    }
}
