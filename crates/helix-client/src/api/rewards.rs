use super::*;

helix_endpoints! {
    /// Create a custom channel point reward.
    create_custom_rewards(CreateCustomRewards) => POST "channel_points/custom_rewards" {
        query { broadcaster_id: String }
        body {
            title: String,
            cost: u64,
            prompt: Option<String>,
            is_enabled: Option<bool>,
            background_color: Option<String>,
            is_user_input_required: Option<bool>,
            is_max_per_stream_enabled: Option<bool>,
            max_per_stream: Option<u64>,
            is_max_per_user_per_stream_enabled: Option<bool>,
            max_per_user_per_stream: Option<u64>,
            is_global_cooldown_enabled: Option<bool>,
            global_cooldown_seconds: Option<u64>,
            should_redemptions_skip_request_queue: Option<bool>,
        }
    }

    delete_custom_reward(DeleteCustomReward) => DELETE "channel_points/custom_rewards" {
        query { broadcaster_id: String, id: String }
    }

    /// Get custom rewards, optionally only those this client can manage.
    get_custom_reward(GetCustomReward) => GET "channel_points/custom_rewards" {
        query {
            broadcaster_id: String,
            id: Option<Vec<String>>,
            only_manageable_rewards: Option<bool>,
        }
    }

    get_custom_reward_redemption(GetCustomRewardRedemption) => GET "channel_points/custom_rewards/redemptions" {
        query {
            broadcaster_id: String,
            reward_id: String,
            id: Option<Vec<String>>,
            status: Option<String>,
            sort: Option<String>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    /// Update a custom reward. Unset fields keep their current value.
    update_custom_reward(UpdateCustomReward) => PATCH "channel_points/custom_rewards" {
        query { broadcaster_id: String, id: String }
        body {
            title: Option<String>,
            prompt: Option<String>,
            cost: Option<u64>,
            background_color: Option<String>,
            is_enabled: Option<bool>,
            is_user_input_required: Option<bool>,
            is_max_per_stream_enabled: Option<bool>,
            max_per_stream: Option<u64>,
            is_max_per_user_per_stream_enabled: Option<bool>,
            max_per_user_per_stream: Option<u64>,
            is_global_cooldown_enabled: Option<bool>,
            global_cooldown_seconds: Option<u64>,
            is_paused: Option<bool>,
            should_redemptions_skip_request_queue: Option<bool>,
        }
    }

    /// Fulfill or cancel redemptions.
    update_redemption_status(UpdateRedemptionStatus) => PATCH "channel_points/custom_rewards/redemptions" {
        query {
            id: Vec<String>,
            broadcaster_id: String,
            reward_id: String,
        }
        body { status: String }
    }
}
