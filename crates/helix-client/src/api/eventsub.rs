use super::*;

helix_endpoints! {
    /// Subscribe to an EventSub event type.
    ///
    /// `condition` and `transport` are passed through as-is.
    create_eventsub_subscription(CreateEventSubSubscription) => POST "eventsub/subscriptions" {
        query {}
        body {
            kind as "type": String,
            version: String,
            condition: Value,
            transport: Value,
        }
    }

    delete_eventsub_subscription(DeleteEventSubSubscription) => DELETE "eventsub/subscriptions" {
        query { id: String }
    }

    get_eventsub_subscriptions(GetEventSubSubscriptions) => GET "eventsub/subscriptions" {
        query {
            status: Option<String>,
            kind as "type": Option<String>,
            after: Option<String>,
        }
    }

    /// Legacy webhook subscriptions.
    get_webhook_subscriptions(GetWebhookSubscriptions) => GET "webhooks/subscriptions" {
        query { after: Option<String>, first: Option<u32> }
    }
}
