use std::sync::{Arc, OnceLock};

use mockito::Matcher;
use serde_json::json;

use super::*;

fn config_for(base_url: impl Into<String>) -> HelixConfig {
    HelixConfig::new("test client", "test token")
        .with_base_url(base_url)
        .without_system_proxy()
}

fn offline() -> HelixSession {
    HelixSession::open(config_for("https://helix.test/helix")).unwrap()
}

async fn mock_server() -> (mockito::ServerGuard, HelixSession) {
    let server = mockito::Server::new_async().await;
    let session = HelixSession::open(config_for(format!("{}/helix/", server.url()))).unwrap();
    (server, session)
}

fn users_query() -> Params {
    let mut query = Params::new();
    query.push("id", json!(["1", "2"]));
    query.push("login", json!("alice"));
    query
}

// ---------------------------------------------------------------------------
// URL and request composition
// ---------------------------------------------------------------------------

#[test]
fn base_url_gets_one_trailing_slash() {
    assert_eq!(offline().base_url(), "https://helix.test/helix/");
}

#[test]
fn empty_query_leaves_bare_url() {
    let built = offline().build(&HelixRequest::new(Method::GET, "users")).unwrap();
    assert_eq!(built.url().as_str(), "https://helix.test/helix/users");
    assert_eq!(built.url().query(), None);
}

#[test]
fn leading_slash_on_path_is_ignored() {
    let url = compose_url("https://helix.test/helix/", "/streams/key", &Params::new()).unwrap();
    assert_eq!(url.as_str(), "https://helix.test/helix/streams/key");
}

#[test]
fn query_repeats_list_keys_and_lowercases_bools() {
    let mut query = users_query();
    query.push("live_only", json!(false));
    let request = HelixRequest::new(Method::GET, "users").with_query(query);
    let built = offline().build(&request).unwrap();
    assert_eq!(built.url().query(), Some("id=1&id=2&login=alice&live_only=false"));
}

#[test]
fn body_is_serialized_as_json() {
    let request = HelixRequest::new(Method::POST, "polls")
        .with_body(json!({ "title": "t", "duration": 60, "bits_voting_enabled": false }));
    let built = offline().build(&request).unwrap();

    assert_eq!(built.headers()["content-type"], "application/json");
    let bytes = built.body().and_then(|b| b.as_bytes()).unwrap();
    let sent: Value = serde_json::from_slice(bytes).unwrap();
    assert_eq!(sent, json!({ "title": "t", "duration": 60, "bits_voting_enabled": false }));
}

#[test]
fn no_body_means_no_payload() {
    let built = offline().build(&HelixRequest::new(Method::DELETE, "raids")).unwrap();
    assert!(built.body().is_none());
    assert!(built.headers().get("content-type").is_none());
}

#[test]
fn auth_headers_on_every_request() {
    let built = offline().build(&HelixRequest::new(Method::GET, "users")).unwrap();
    assert_eq!(built.headers()["client-id"], "test client");
    assert_eq!(built.headers()["authorization"], "Bearer test token");
    assert!(built.headers()["authorization"].is_sensitive());
}

#[test]
fn control_characters_in_token_are_rejected() {
    let err = HelixSession::open(HelixConfig::new("client", "bad\ntoken")).unwrap_err();
    assert!(matches!(err, HelixError::InvalidHeader(_)));
}

#[test]
fn unparsable_base_url_is_rejected() {
    let err = HelixSession::open(HelixConfig::new("client", "token").with_base_url("not a url"))
        .unwrap_err();
    assert!(matches!(err, HelixError::InvalidUrl(_)));
}

// ---------------------------------------------------------------------------
// Responses and error policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_body_is_decoded() {
    let (mut server, api) = mock_server().await;
    let mock = server
        .mock("GET", "/helix/users")
        .match_query(Matcher::Exact("id=1&id=2&login=alice".into()))
        .match_header("authorization", "Bearer test token")
        .match_header("client-id", "test client")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"id":"1","login":"alice","display_name":"Alice"}],"pagination":{"cursor":"abc"}}"#)
        .create_async()
        .await;

    let request = HelixRequest::new(Method::GET, "users").with_query(users_query());
    let reply = api.perform(&request).await.unwrap();

    mock.assert_async().await;
    assert!(reply.is_success());
    assert_eq!(reply.status, 200);
    assert_eq!(reply.cursor(), Some("abc"));
    let page = reply.page::<crate::TwitchUser>().unwrap();
    assert_eq!(page.data[0].display_name, "Alice");
    let users: Vec<crate::TwitchUser> = reply.data().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].login, "alice");
}

#[test]
fn data_rows_decode_without_the_envelope() {
    let reply = HelixReply {
        status: 200,
        body: json!({ "data": [{ "user_id": "7", "user_login": "bob", "user_name": "Bob" }] }),
    };
    let rows: Vec<crate::Chatter> = reply.data().unwrap();
    assert_eq!(rows[0].user_name, "Bob");

    let missing = HelixReply { status: 204, body: Value::Null };
    let err = missing.data::<crate::Chatter>().unwrap_err();
    assert!(matches!(err, HelixError::Decode { status: 204, .. }));
}

#[test]
fn malformed_user_agent_is_a_build_error() {
    let err = HelixSession::open(
        HelixConfig::new("client", "token").with_user_agent("helix\nclient"),
    )
    .unwrap_err();
    assert!(matches!(err, HelixError::Build(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn failure_status_raises_with_remote_message() {
    let (mut server, api) = mock_server().await;
    server
        .mock("GET", "/helix/users")
        .with_status(429)
        .with_body(r#"{"error":"Too Many Requests","status":429,"message":"slow down"}"#)
        .create_async()
        .await;

    let err = api
        .perform(&HelixRequest::new(Method::GET, "users"))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    match err {
        HelixError::Status { status, message, body } => {
            assert_eq!(status, 429);
            assert_eq!(message, "slow down");
            assert_eq!(body["error"], "Too Many Requests");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn failure_status_returned_when_raising_is_off() {
    let (mut server, api) = mock_server().await;
    server
        .mock("GET", "/helix/users")
        .with_status(429)
        .with_body(r#"{"error":"Too Many Requests","status":429,"message":"slow down"}"#)
        .create_async()
        .await;

    let request = HelixRequest::new(Method::GET, "users").without_raise();
    let reply = api.perform(&request).await.unwrap();

    assert!(!reply.is_success());
    assert_eq!(reply.status, 429);
    assert_eq!(reply.body["message"], "slow down");
}

#[tokio::test]
async fn non_json_failure_body_is_kept_as_text() {
    let (mut server, api) = mock_server().await;
    server
        .mock("GET", "/helix/users")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = api
        .perform(&HelixRequest::new(Method::GET, "users"))
        .await
        .unwrap_err();
    match err {
        HelixError::Status { status, message, body } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
            assert_eq!(body, Value::String("Bad Gateway".into()));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let (mut server, api) = mock_server().await;
    server
        .mock("GET", "/helix/users")
        .with_status(200)
        .with_body("<html>nope</html>")
        .create_async()
        .await;

    let err = api
        .perform(&HelixRequest::new(Method::GET, "users"))
        .await
        .unwrap_err();
    assert!(matches!(err, HelixError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn no_content_decodes_to_null() {
    let (mut server, api) = mock_server().await;
    server
        .mock("DELETE", "/helix/raids")
        .match_query(Matcher::UrlEncoded("broadcaster_id".into(), "1".into()))
        .with_status(204)
        .create_async()
        .await;

    let mut query = Params::new();
    query.push("broadcaster_id", json!("1"));
    let body = api
        .request_json(Method::DELETE, "raids", query, None)
        .await
        .unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn json_body_reaches_the_server() {
    let (mut server, api) = mock_server().await;
    let mock = server
        .mock("POST", "/helix/channels/commercial")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "broadcaster_id": "1", "length": 30 })))
        .with_status(200)
        .with_body(r#"{"data":[{"length":30,"message":"","retry_after":480}]}"#)
        .create_async()
        .await;

    let body = api
        .request_json(
            Method::POST,
            "channels/commercial",
            Params::new(),
            Some(json!({ "broadcaster_id": "1", "length": 30 })),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(body["data"][0]["retry_after"], 480);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HelixSession::open(config_for(format!("http://127.0.0.1:{port}/helix/"))).unwrap();

    let err = api
        .perform(&HelixRequest::new(Method::GET, "users"))
        .await
        .unwrap_err();
    assert!(matches!(err, HelixError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn concurrent_calls_share_one_session() {
    let (mut server, api) = mock_server().await;
    let mock = server
        .mock("GET", "/helix/streams")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let first = HelixRequest::new(Method::GET, "streams");
    let mut query = Params::new();
    query.push("first", json!(5));
    let second = HelixRequest::new(Method::GET, "streams").with_query(query);

    let (a, b) = tokio::join!(api.perform(&first), api.perform(&second));
    assert_eq!(a.unwrap().body, json!({ "data": [] }));
    assert_eq!(b.unwrap().body, json!({ "data": [] }));
    mock.assert_async().await;
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn close_releases_once() {
    let mut api = offline();
    let release = api.release_probe();

    assert!(!api.is_closed());
    assert!(api.close());
    assert!(!api.close());
    assert!(api.is_closed());
    assert_eq!(release.release_count(), 1);

    drop(api);
    assert_eq!(release.release_count(), 1);
}

#[test]
fn drop_releases_an_open_session() {
    let release = offline().release_probe();
    assert!(release.is_released());
    assert_eq!(release.release_count(), 1);
}

#[tokio::test]
async fn closed_session_refuses_requests() {
    let mut api = offline();
    api.close();

    let err = api
        .perform(&HelixRequest::new(Method::GET, "users"))
        .await
        .unwrap_err();
    assert!(matches!(err, HelixError::SessionClosed));
    assert!(matches!(
        api.build(&HelixRequest::new(Method::GET, "users")),
        Err(HelixError::SessionClosed)
    ));
}

#[tokio::test]
async fn scoped_session_is_released_after_success() {
    let (mut server, _outer) = mock_server().await;
    server
        .mock("GET", "/helix/games/top")
        .with_status(200)
        .with_body(r#"{"data":[{"id":"509658","name":"Just Chatting"}]}"#)
        .create_async()
        .await;

    let release = Arc::new(OnceLock::new());
    let seen = Arc::clone(&release);
    let config = config_for(format!("{}/helix/", server.url()));

    let body = HelixSession::scoped(config, move |api| {
        let _ = seen.set(api.release_probe());
        Box::pin(async move {
            api.request_json(Method::GET, "games/top", Params::new(), None)
                .await
        })
    })
    .await
    .unwrap();

    assert_eq!(body["data"][0]["name"], "Just Chatting");
    let release: &ReleaseProbe = release.get().unwrap();
    assert_eq!(release.release_count(), 1);
}

#[tokio::test]
async fn scoped_session_is_released_after_failure() {
    let (mut server, _outer) = mock_server().await;
    server
        .mock("GET", "/helix/games/top")
        .with_status(401)
        .with_body(r#"{"error":"Unauthorized","status":401,"message":"Invalid OAuth token"}"#)
        .create_async()
        .await;

    let release = Arc::new(OnceLock::new());
    let seen = Arc::clone(&release);
    let config = config_for(format!("{}/helix/", server.url()));

    let err = HelixSession::scoped(config, move |api| {
        let _ = seen.set(api.release_probe());
        Box::pin(async move {
            api.request_json(Method::GET, "games/top", Params::new(), None)
                .await
        })
    })
    .await
    .unwrap_err();

    assert!(err.is_unauthorized());
    let release: &ReleaseProbe = release.get().unwrap();
    assert!(release.is_released());
}

#[tokio::test]
async fn owned_session_is_released_when_caller_bails_early() {
    async fn fetch(api: HelixSession) -> Result<Value, HelixError> {
        let reply = api.perform(&HelixRequest::new(Method::GET, "users")).await?;
        Ok(reply.body)
    }

    let (mut server, api) = mock_server().await;
    server
        .mock("GET", "/helix/users")
        .with_status(500)
        .with_body(r#"{"message":"boom"}"#)
        .create_async()
        .await;

    let release = api.release_probe();
    let err = fetch(api).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(release.release_count(), 1);
}
