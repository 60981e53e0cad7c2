//! Multi-call helpers layered on the raw endpoints.

use serde::Serialize;

use super::*;

/// What a chat bot needs to shout out another channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoutoutInfo {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub game_name: String,
    pub game_id: String,
    pub broadcaster_language: String,
    pub stream_title: String,
}

impl ShoutoutInfo {
    pub fn user_link(&self) -> String {
        format!("https://twitch.tv/{}", self.username)
    }
}

impl From<ChannelInformation> for ShoutoutInfo {
    fn from(channel: ChannelInformation) -> Self {
        Self {
            user_id: channel.broadcaster_id,
            username: channel.broadcaster_login,
            display_name: channel.broadcaster_name,
            game_name: channel.game_name,
            game_id: channel.game_id,
            broadcaster_language: channel.broadcaster_language,
            stream_title: channel.title,
        }
    }
}

impl HelixSession {
    /// Look up shoutout details by user ID, or by login when no ID is given.
    ///
    /// Returns `Ok(None)` when the user or their channel does not exist.
    pub async fn get_shoutout_info(
        &self,
        username: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Option<ShoutoutInfo>, HelixError> {
        let user_id = match (user_id, username) {
            (Some(id), _) => id.to_owned(),
            (None, Some(login)) => {
                let options = GetUsers {
                    login: Some(vec![login.to_owned()]),
                    ..Default::default()
                };
                let reply = self.perform(&options.request()).await?;
                match reply.page::<TwitchUser>()?.data.into_iter().next() {
                    Some(user) => user.id,
                    None => return Ok(None),
                }
            }
            (None, None) => return Err(HelixError::MissingArgument("username or user_id")),
        };

        let options = GetChannelInformation {
            broadcaster_id: user_id,
        };
        let reply = self.perform(&options.request()).await?;
        let channel = reply.page::<ChannelInformation>()?.data.into_iter().next();
        Ok(channel.map(ShoutoutInfo::from))
    }

    /// Whether `user_id` currently subscribes to `broadcaster_id`.
    pub async fn is_user_subscribed_to_channel(
        &self,
        broadcaster_id: &str,
        user_id: &str,
    ) -> Result<bool, HelixError> {
        let options = CheckUserSubscription {
            broadcaster_id: broadcaster_id.to_owned(),
            user_id: user_id.to_owned(),
        };

        match self.perform(&options.request()).await {
            Ok(reply) => Ok(reply
                .body
                .get("data")
                .and_then(Value::as_array)
                .and_then(|rows| rows.first())
                .is_some_and(|row| row.get("tier").is_some())),
            Err(err) if err.is_not_found() => {
                tracing::debug!(broadcaster_id, user_id, "Subscription check returned 404");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
