//! Helix endpoints, one options struct and one session method each.
//!
//! Endpoints are declared as table rows through [`helix_endpoints!`]: verb,
//! relative path, and which fields go to the query string versus the JSON
//! body. A field typed `T` is required and always sent; a field typed
//! `Option<T>` is left out of the request while it is `None`.

use reqwest::Method;
use serde_json::Value;

use crate::HelixError;
use crate::params::{ParamSlot, exclude_unset};
use crate::session::{HelixRequest, HelixSession};

macro_rules! wire_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident $key:literal) => {
        $key
    };
}

macro_rules! request_body {
    ($options:ident) => {
        None
    };
    ($options:ident { $( ($field:ident $($key:literal)?) )* }) => {{
        let candidates: Vec<(&'static str, Option<Value>)> = vec![
            $( (wire_key!($field $($key)?), $options.$field.clone().into_slot()), )*
        ];
        Some(exclude_unset(candidates).into_json())
    }};
}

macro_rules! helix_endpoints {
    ($(
        $(#[$meta:meta])*
        $method:ident($options:ident) => $verb:ident $path:literal {
            query { $( $q:ident $(as $qk:literal)? : $qt:ty ),* $(,)? }
            $( body { $( $b:ident $(as $bk:literal)? : $bt:ty ),* $(,)? } )?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default)]
            pub struct $options {
                $( pub $q: $qt, )*
                $($( pub $b: $bt, )*)?
            }

            impl $options {
                /// Request descriptor with only the supplied fields.
                pub fn request(&self) -> HelixRequest {
                    let candidates: Vec<(&'static str, Option<Value>)> = vec![
                        $( (wire_key!($q $($qk)?), self.$q.clone().into_slot()), )*
                    ];
                    let body: Option<Value> =
                        request_body!(self $({ $( ($b $($bk)?) )* })?);

                    let mut request = HelixRequest::new(Method::$verb, $path)
                        .with_query(exclude_unset(candidates));
                    request.body = body;
                    request
                }
            }

            impl HelixSession {
                $(#[$meta])*
                pub async fn $method(&self, options: &$options) -> Result<Value, HelixError> {
                    self.perform(&options.request()).await.map(|reply| reply.body)
                }
            }
        )*
    };
}

mod ads;
mod analytics;
mod channels;
mod chat;
mod clips;
mod common;
mod engagement;
mod entitlements;
mod eventsub;
mod extensions;
mod games;
mod moderation;
mod polls;
mod raids;
mod rewards;
mod schedule;
mod search;
mod streams;
mod subscriptions;
mod tags;
mod teams;
mod users;
mod videos;

pub mod models;


pub use ads::*;
pub use analytics::*;
pub use channels::*;
pub use chat::*;
pub use clips::*;
pub use common::ShoutoutInfo;
pub use engagement::*;
pub use entitlements::*;
pub use eventsub::*;
pub use extensions::*;
pub use games::*;
pub use models::{
    BitsCost, ChannelInformation, ChatColor, Chatter, CustomReward, FollowedChannel,
    GlobalCooldownSetting, HelixPage, HelixPagination, MaxPerStreamSetting,
    MaxPerUserPerStreamSetting, PollChoice, PredictionOutcome, StreamInfo, TwitchUser,
    UserSubscription,
};
pub use moderation::*;
pub use polls::*;
pub use raids::*;
pub use rewards::*;
pub use schedule::*;
pub use search::*;
pub use streams::*;
pub use subscriptions::*;
pub use tags::*;
pub use teams::*;
pub use users::*;
pub use videos::*;
