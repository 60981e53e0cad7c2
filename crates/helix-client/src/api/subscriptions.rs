use super::*;

helix_endpoints! {
    get_broadcaster_subscriptions(GetBroadcasterSubscriptions) => GET "subscriptions" {
        query {
            broadcaster_id: String,
            user_id: Option<Vec<String>>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    /// Check whether a user subscribes to a broadcaster. 404 means no.
    check_user_subscription(CheckUserSubscription) => GET "subscriptions/user" {
        query { broadcaster_id: String, user_id: String }
    }
}
