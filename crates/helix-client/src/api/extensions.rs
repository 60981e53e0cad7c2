use super::*;

helix_endpoints! {
    get_extension_configuration_segment(GetExtensionConfigurationSegment) => GET "extensions/configurations" {
        query {
            broadcaster_id: Option<String>,
            extension_id: String,
            segment: String,
        }
    }

    set_extension_configuration_segment(SetExtensionConfigurationSegment) => PUT "extensions/configurations" {
        query {}
        body {
            extension_id: String,
            segment: String,
            broadcaster_id: Option<String>,
            content: Option<String>,
            version: Option<String>,
        }
    }

    set_extension_required_configuration(SetExtensionRequiredConfiguration) => PUT "extensions/required_configuration" {
        query { broadcaster_id: String }
        body {
            extension_id: String,
            extension_version: String,
            configuration_version: String,
        }
    }

    send_extension_pubsub_message(SendExtensionPubSubMessage) => POST "extensions/pubsub" {
        query {}
        body {
            target: Vec<String>,
            broadcaster_id: String,
            is_global_broadcast: Option<bool>,
            message: String,
        }
    }

    /// Get one page of live channels that have the extension installed.
    get_live_channels(GetLiveChannels) => GET "extensions/live" {
        query {
            extension_id: String,
            first: Option<u32>,
            after: Option<String>,
        }
    }

    get_extension_secrets(GetExtensionSecrets) => GET "extensions/jwt/secrets" {
        query {}
    }

    create_extension_secret(CreateExtensionSecret) => POST "extensions/jwt/secrets" {
        query { delay: Option<u32> }
    }

    send_extension_chat_message(SendExtensionChatMessage) => POST "extensions/chat" {
        query { broadcaster_id: String }
        body {
            text: String,
            extension_id: String,
            extension_version: String,
        }
    }

    get_extensions(GetExtensions) => GET "extensions" {
        query { extension_id: String, extension_version: Option<String> }
    }

    get_released_extensions(GetReleasedExtensions) => GET "extensions/released" {
        query { extension_id: String, extension_version: Option<String> }
    }

    get_extension_transactions(GetExtensionTransactions) => GET "extensions/transactions" {
        query {
            extension_id: String,
            id: Option<Vec<String>>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    get_extension_bits_products(GetExtensionBitsProducts) => GET "bits/extensions" {
        query { should_include_all: Option<bool> }
    }

    /// Add or update a Bits product.
    ///
    /// `cost` is sent as a nested object and dropped entirely when none of
    /// its fields are set.
    update_extension_bits_product(UpdateExtensionBitsProduct) => PUT "bits/extensions" {
        query {}
        body {
            sku: String,
            cost: BitsCost,
            display_name: String,
            in_development: Option<bool>,
            expiration: Option<String>,
            is_broadcast: Option<bool>,
        }
    }
}
