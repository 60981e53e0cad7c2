//! Request gateway bound to one authenticated session.
//!
//! The session owns the pooled HTTP client and the credentials. Every
//! endpoint funnels through [`HelixSession::perform`], which composes the
//! URL, attaches `Client-Id` + Bearer headers, sends the optional JSON
//! body and applies the error policy.

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::future::BoxFuture;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::HelixError;
use crate::api::HelixPage;
use crate::config::HelixConfig;
use crate::params::{Params, encode_query};

/// One REST call: verb, relative path, query and optional JSON body.
#[derive(Debug, Clone)]
pub struct HelixRequest {
    pub method: Method,
    pub path: String,
    pub query: Params,
    pub body: Option<Value>,
    pub raise_on_error: bool,
}

impl HelixRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Params::new(),
            body: None,
            raise_on_error: true,
        }
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Return 4xx/5xx responses as a [`HelixReply`] instead of an error.
    pub fn without_raise(mut self) -> Self {
        self.raise_on_error = false;
        self
    }
}

/// Status and decoded body of a completed call.
///
/// An empty body (e.g. 204) decodes to `Value::Null`. A failure body that is
/// not JSON is kept as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixReply {
    pub status: u16,
    pub body: Value,
}

impl HelixReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the standard `{data, pagination}` envelope.
    pub fn page<T: DeserializeOwned>(&self) -> Result<HelixPage<T>, HelixError> {
        serde_json::from_value(self.body.clone()).map_err(|source| HelixError::Decode {
            status: self.status,
            source,
        })
    }

    /// Decode only the `data` rows.
    pub fn data<T: DeserializeOwned>(&self) -> Result<Vec<T>, HelixError> {
        self.page().map(|page| page.data)
    }

    /// Cursor for the next page, if the remote returned one.
    pub fn cursor(&self) -> Option<&str> {
        self.body
            .get("pagination")
            .and_then(|p| p.get("cursor"))
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
    }
}

/// Observes when a session's transport is released.
///
/// Stays readable after the session itself is gone.
#[derive(Debug, Clone, Default)]
pub struct ReleaseProbe(Arc<AtomicUsize>);

impl ReleaseProbe {
    pub fn release_count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_released(&self) -> bool {
        self.release_count() > 0
    }

    fn mark(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Authenticated Helix session.
///
/// Safe to share across tasks: `perform` only reads immutable state, and the
/// pooled client handles concurrent requests. Closing requires `&mut self`,
/// so it can never race an in-flight call. Dropping the session closes it.
#[derive(Debug)]
pub struct HelixSession {
    http: Option<reqwest::Client>,
    headers: HeaderMap,
    base_url: String,
    release: ReleaseProbe,
}

impl HelixSession {
    /// Store credentials and build the transport. No network I/O happens here.
    pub fn open(config: HelixConfig) -> Result<Self, HelixError> {
        let headers = auth_headers(&config.client_id, &config.bearer_token)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(HelixError::Build)?;

        let base_url = config.normalized_base_url();
        Url::parse(&base_url)?;

        tracing::debug!(base_url = %base_url, client_id = %config.client_id, "Helix session opened");

        Ok(Self {
            http: Some(http),
            headers,
            base_url,
            release: ReleaseProbe::default(),
        })
    }

    /// Open a session, run `f` with it, then close it on every exit path.
    ///
    /// ```no_run
    /// # async fn demo() -> Result<(), helix_client::HelixError> {
    /// use helix_client::{HelixConfig, HelixSession, api::GetUsers};
    ///
    /// let config = HelixConfig::new("client-id", "token");
    /// let users = HelixSession::scoped(config, |api| {
    ///     Box::pin(async move {
    ///         let options = GetUsers { login: Some(vec!["twitchdev".into()]), ..Default::default() };
    ///         api.get_users(&options).await
    ///     })
    /// })
    /// .await?;
    /// # let _ = users;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scoped<T, F>(config: HelixConfig, f: F) -> Result<T, HelixError>
    where
        F: for<'a> FnOnce(&'a HelixSession) -> BoxFuture<'a, Result<T, HelixError>>,
    {
        let mut session = Self::open(config)?;
        let result = f(&session).await;
        session.close();
        result
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_none()
    }

    pub fn release_probe(&self) -> ReleaseProbe {
        self.release.clone()
    }

    /// Release the transport. Returns `false` if it was already released.
    pub fn close(&mut self) -> bool {
        match self.http.take() {
            Some(client) => {
                drop(client);
                self.release.mark();
                tracing::debug!(base_url = %self.base_url, "Helix session closed");
                true
            }
            None => false,
        }
    }

    fn transport(&self) -> Result<&reqwest::Client, HelixError> {
        self.http.as_ref().ok_or(HelixError::SessionClosed)
    }

    /// Build the outgoing request without sending it.
    pub fn build(&self, request: &HelixRequest) -> Result<reqwest::Request, HelixError> {
        let http = self.transport()?;
        let url = compose_url(&self.base_url, &request.path, &request.query)?;

        let mut builder = http
            .request(request.method.clone(), url)
            .headers(self.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.build().map_err(HelixError::Build)
    }

    /// Send one request and decode its JSON response.
    pub async fn perform(&self, request: &HelixRequest) -> Result<HelixReply, HelixError> {
        let http = self.transport()?;
        let outgoing = self.build(request)?;

        tracing::debug!(method = %outgoing.method(), url = %outgoing.url(), "Helix request");
        let resp = http.execute(outgoing).await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(status = status.as_u16(), path = %request.path, "Helix response");

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path = %request.path, "Got 401, caller should supply a fresh token");
        }

        if status.is_client_error() || status.is_server_error() {
            let body = lenient_json(&text);
            if request.raise_on_error {
                return Err(HelixError::Status {
                    status: status.as_u16(),
                    message: error_message(&body, &text),
                    body,
                });
            }
            return Ok(HelixReply {
                status: status.as_u16(),
                body,
            });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|source| HelixError::Decode {
                status: status.as_u16(),
                source,
            })?
        };

        Ok(HelixReply {
            status: status.as_u16(),
            body,
        })
    }

    /// `perform` with error raising on, returning only the body.
    pub async fn request_json(
        &self,
        method: Method,
        path: &str,
        query: Params,
        body: Option<Value>,
    ) -> Result<Value, HelixError> {
        let mut request = HelixRequest::new(method, path).with_query(query);
        request.body = body;
        self.perform(&request).await.map(|reply| reply.body)
    }
}

impl Drop for HelixSession {
    fn drop(&mut self) {
        self.close();
    }
}

const CLIENT_ID: HeaderName = HeaderName::from_static("client-id");

fn auth_headers(client_id: &str, token: &str) -> Result<HeaderMap, HelixError> {
    let mut headers = HeaderMap::new();
    let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CLIENT_ID, HeaderValue::from_str(client_id)?);
    Ok(headers)
}

/// `base + path`, plus `?query` only when there is something to encode.
pub(crate) fn compose_url(base: &str, path: &str, query: &Params) -> Result<Url, HelixError> {
    let mut raw = format!("{base}{}", path.trim_start_matches('/'));
    if !query.is_empty() {
        raw.push('?');
        raw.push_str(&encode_query(query));
    }
    Ok(Url::parse(&raw)?)
}

fn lenient_json(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

fn error_message(body: &Value, raw: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| raw.to_owned())
}
