use super::*;

helix_endpoints! {
    /// Check whether AutoMod would flag a message.
    check_automod_status(CheckAutomodStatus) => POST "moderation/enforcements/status" {
        query { broadcaster_id: String }
        body {
            msg_id: String,
            msg_text: String,
            user_id: String,
        }
    }

    /// Allow or deny a message held by AutoMod.
    manage_held_automod_messages(ManageHeldAutomodMessages) => POST "moderation/automod/message" {
        query {}
        body {
            user_id: String,
            msg_id: String,
            action: String,
        }
    }

    get_banned_events(GetBannedEvents) => GET "moderation/banned/events" {
        query {
            broadcaster_id: String,
            user_id: Option<Vec<String>>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    get_banned_users(GetBannedUsers) => GET "moderation/banned" {
        query {
            broadcaster_id: String,
            user_id: Option<Vec<String>>,
            first: Option<u32>,
            after: Option<String>,
            before: Option<String>,
        }
    }

    get_moderators(GetModerators) => GET "moderation/moderators" {
        query {
            broadcaster_id: String,
            user_id: Option<Vec<String>>,
            first: Option<u32>,
            after: Option<String>,
        }
    }

    get_moderator_events(GetModeratorEvents) => GET "moderation/moderators/events" {
        query {
            broadcaster_id: String,
            user_id: Option<Vec<String>>,
            after: Option<String>,
            first: Option<u32>,
        }
    }
}
