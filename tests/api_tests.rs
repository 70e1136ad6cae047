//! HTTP client tests with mocked backend responses
//!
//! These tests use wiremock to stand in for the SHAKTI backend and check:
//! - Request paths, methods and bearer headers
//! - Request bodies for auth, chat and password updates
//! - Error classification and backend `detail` extraction
//! - Response unwrapping (history, deletion)

#![cfg(feature = "http")]

use serde_json::json;
use shakti::api::{HttpClient, ShaktiApi};
use shakti::types::{AuthRequest, ChatPayload, ClientError, PasswordUpdate, Sender};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

async fn setup() -> (MockServer, HttpClient) {
    let server = MockServer::start().await;
    let client = HttpClient::new(server.uri());
    (server, client)
}

fn history_entry(sender: &str, text: &str) -> serde_json::Value {
    json!({
        "sender": sender,
        "message": text,
        "images": null,
        "videos": [],
        "timestamp": "2024-11-03T09:30:00.123456"
    })
}

// ============= Auth =============

#[tokio::test]
async fn test_login_posts_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "ryan@example.com",
            "password": "hunter22",
            "name": "",
            "position": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-abc",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = AuthRequest {
        email: "ryan@example.com".to_string(),
        password: "hunter22".to_string(),
        ..Default::default()
    };
    let auth = client.login(&request).await.unwrap();
    assert_eq!(auth.access_token, "jwt-abc");
}

#[tokio::test]
async fn test_login_failure_detail() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&server)
        .await;

    let err = client.login(&AuthRequest::default()).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.detail(), Some("Incorrect email or password"));
}

#[tokio::test]
async fn test_signup_conflict_is_status_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email already registered"})),
        )
        .mount(&server)
        .await;

    let err = client.signup(&AuthRequest::default()).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Status {
            status: 400,
            detail: "Email already registered".to_string()
        }
    );
}

// ============= User =============

#[tokio::test]
async fn test_profile_sends_bearer() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Ronit",
            "email": "ronit@example.com",
            "position": "Captain",
            "isAdmin": true,
            "createdAt": "2024-10-01T08:00:00",
            "totalContexts": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.profile("tok").await.unwrap();
    assert!(user.is_admin);
    assert_eq!(user.total_contexts, 12);
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn test_update_password_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/user/update"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "email": "ronit@example.com",
            "currentPassword": "old",
            "newPassword": "new"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "Password updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = PasswordUpdate {
        email: "ronit@example.com".to_string(),
        current_password: "old".to_string(),
        new_password: "new".to_string(),
    };
    let ack = client.update_password("tok", &request).await.unwrap();
    assert_eq!(ack.msg, "Password updated");
}

// ============= Chat contexts =============

#[tokio::test]
async fn test_create_chat_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/context"))
        .and(body_json(json!({
            "message": null,
            "images": ["aGVsbG8="],
            "videos": [],
            "pdfs": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "6753a1",
            "title": "Vehicle count",
            "response": "Two trucks.",
            "images": ["6753a1_0.png"],
            "videos": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = ChatPayload {
        images: vec!["aGVsbG8=".to_string()],
        ..Default::default()
    };
    let created = client.create_chat("tok", &payload).await.unwrap();
    assert_eq!(created.id, "6753a1");
    assert_eq!(created.images, ["6753a1_0.png"]);
    assert!(created.videos.is_empty());
}

#[tokio::test]
async fn test_list_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/context"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a", "title": "Convoy"},
            {"id": "b", "title": "Airfield"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/chat/context/b"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "a", "title": "Convoy"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.list_chats("tok").await.unwrap().len(), 2);

    let remaining = client.delete_chat("tok", "b").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "a");
}

#[tokio::test]
async fn test_history_unwraps_chats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/6753a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chats": [
                history_entry("user", "Count the vehicles"),
                history_entry("bot", "Two trucks.")
            ]
        })))
        .mount(&server)
        .await;

    let history = client.chat_history("tok", "6753a1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, Sender::User);
    assert!(history[0].images.is_empty());
    assert_eq!(history[1].text(), "Two trucks.");
}

#[tokio::test]
async fn test_send_message_returns_new_entries() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/6753a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            history_entry("user", "Any aircraft?"),
            history_entry("bot", "No aircraft visible.")
        ])))
        .mount(&server)
        .await;

    let payload = ChatPayload {
        message: Some("Any aircraft?".to_string()),
        ..Default::default()
    };
    let added = client.send_message("tok", "6753a1", &payload).await.unwrap();
    assert_eq!(added.len(), 2);
    assert_eq!(added[1].sender, Sender::Bot);
}

// ============= Errors =============

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/context"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})),
        )
        .mount(&server)
        .await;

    let err = client.list_chats("expired").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/x"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.chat_history("tok", "x").await.unwrap_err();
    assert_eq!(err.detail(), Some("Bad Gateway"));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.profile("tok").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = HttpClient::new("http://127.0.0.1:9");
    let err = client.list_chats("tok").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
