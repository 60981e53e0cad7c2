//! Session configuration: credentials, base URL and transport knobs.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/helix/";

const ENV_CLIENT_ID: &str = "HELIX_CLIENT_ID";
const ENV_TOKEN: &str = "HELIX_TOKEN";
const ENV_BASE_URL: &str = "HELIX_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "HELIX_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything a [`crate::HelixSession`] needs at construction.
#[derive(Clone)]
pub struct HelixConfig {
    pub client_id: String,
    pub bearer_token: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub system_proxy: bool,
}

impl HelixConfig {
    pub fn new(client_id: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            bearer_token: bearer_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            system_proxy: true,
        }
    }

    /// Point the session at another server, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub fn without_system_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }

    /// Base URL ending in exactly one `/`.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Load from `HELIX_CLIENT_ID`, `HELIX_TOKEN`, `HELIX_BASE_URL` and
    /// `HELIX_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HelixConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let mut config = Self::new(required(ENV_CLIENT_ID)?, required(ENV_TOKEN)?);

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl fmt::Debug for HelixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelixConfig")
            .field("client_id", &self.client_id)
            .field("bearer_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("system_proxy", &self.system_proxy)
            .finish()
    }
}
