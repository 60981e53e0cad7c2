use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::params::{ParamSlot, nested};

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelixPagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Standard Helix `{data, pagination, total}` envelope.
///
/// The client never follows `pagination.cursor`; pass it back as `after`
/// to fetch the next page.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<HelixPagination>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> HelixPage<T> {
    pub fn next_cursor(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Response rows
// ---------------------------------------------------------------------------

/// User information from GET /helix/users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitchUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// Channel information from GET /helix/channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelInformation {
    pub broadcaster_id: String,
    pub broadcaster_login: String,
    pub broadcaster_name: String,
    #[serde(default)]
    pub broadcaster_language: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub delay: u32,
}

/// Stream information from GET /helix/streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamInfo {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: u64,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(rename = "type")]
    pub stream_type: String,
}

/// Followed channel entry from GET /helix/channels/followed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedChannel {
    pub broadcaster_id: String,
    pub broadcaster_login: String,
    pub broadcaster_name: String,
    #[serde(default)]
    pub followed_at: String,
}

/// Chatter entry from GET /helix/chat/chatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chatter {
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
}

/// User chat color from GET /helix/chat/color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatColor {
    pub user_id: String,
    pub user_name: String,
    pub user_login: String,
    pub color: String,
}

/// Subscription row from GET /helix/subscriptions/user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscription {
    pub broadcaster_id: String,
    pub broadcaster_login: String,
    #[serde(default)]
    pub is_gift: bool,
    pub tier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxPerStreamSetting {
    pub is_enabled: bool,
    pub max_per_stream: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxPerUserPerStreamSetting {
    pub is_enabled: bool,
    pub max_per_user_per_stream: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalCooldownSetting {
    pub is_enabled: bool,
    pub global_cooldown_seconds: u64,
}

/// Custom channel point reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomReward {
    pub id: String,
    pub title: String,
    pub cost: u64,
    pub is_enabled: bool,
    pub is_paused: bool,
    pub is_in_stock: bool,
    pub prompt: Option<String>,
    pub background_color: Option<String>,
    #[serde(default)]
    pub is_user_input_required: bool,
    #[serde(default)]
    pub max_per_stream_setting: Option<MaxPerStreamSetting>,
    #[serde(default)]
    pub max_per_user_per_stream_setting: Option<MaxPerUserPerStreamSetting>,
    #[serde(default)]
    pub global_cooldown_setting: Option<GlobalCooldownSetting>,
    #[serde(default)]
    pub redemptions_redeemed_current_stream: Option<u64>,
}

// ---------------------------------------------------------------------------
// Nested request parameters
// ---------------------------------------------------------------------------

/// `cost` object of an extension Bits product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BitsCost {
    pub amount: Option<u64>,
    /// Sent as `type`; Twitch currently only accepts `"bits"`.
    pub kind: Option<String>,
}

impl ParamSlot for BitsCost {
    fn into_slot(self) -> Option<Value> {
        nested([("amount", self.amount.into_slot()), ("type", self.kind.into_slot())])
    }
}

impl ParamSlot for Option<BitsCost> {
    fn into_slot(self) -> Option<Value> {
        self.and_then(ParamSlot::into_slot)
    }
}

/// One answer of a poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollChoice {
    pub title: String,
}

/// One outcome of a prediction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionOutcome {
    pub title: String,
}

impl ParamSlot for Vec<PollChoice> {
    fn into_slot(self) -> Option<Value> {
        Some(Value::Array(
            self.into_iter().map(|c| json!({ "title": c.title })).collect(),
        ))
    }
}

impl ParamSlot for Vec<PredictionOutcome> {
    fn into_slot(self) -> Option<Value> {
        Some(Value::Array(
            self.into_iter().map(|o| json!({ "title": o.title })).collect(),
        ))
    }
}
