//! Typed client for the Twitch Helix REST API.
//!
//! Every endpoint method is a thin call site over two pieces: the
//! sparse-parameter filter in [`params`] and the request gateway in
//! [`session`]. Responses are handed back as untouched JSON.

pub mod api;
pub mod config;
pub mod params;
pub mod session;

pub use api::{
    BitsCost, ChannelInformation, Chatter, FollowedChannel, HelixPage, HelixPagination, PollChoice,
    PredictionOutcome, ShoutoutInfo, StreamInfo, TwitchUser, UserSubscription,
};
pub use config::{ConfigError, DEFAULT_BASE_URL, HelixConfig};
pub use params::{ParamSlot, Params, encode_query, exclude_unset, nested};
pub use reqwest::Method;
pub use session::{HelixReply, HelixRequest, HelixSession, ReleaseProbe};

/// Unified error type for the helix-client crate.
///
/// `Transport`, `Status` and `Decode` are the only kinds an in-flight call
/// can produce, and they never overlap.
#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Twitch API error (status {status}): {message}")]
    Status {
        status: u16,
        message: String,
        body: serde_json::Value,
    },

    #[error("Response (status {status}) is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client or request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Session is closed")]
    SessionClosed,

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

impl HelixError {
    /// HTTP status of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            HelixError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
