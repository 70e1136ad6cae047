//! Mock API and fixtures shared across the flow tests.
//!
//! `MockApi` is generated by mockall from the [`ShaktiApi`] trait, so each
//! test states exactly which endpoints it expects to be hit.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use shakti::api::ShaktiApi;
use shakti::types::{
    AuthRequest, AuthResponse, ChatMessage, ChatPayload, ChatSummary, CreatedChat,
    PasswordUpdate, Result, Sender, StatusMessage, UserProfile,
};

mock! {
    pub Api {}

    #[async_trait]
    impl ShaktiApi for Api {
        async fn login(&self, request: &AuthRequest) -> Result<AuthResponse>;
        async fn signup(&self, request: &AuthRequest) -> Result<AuthResponse>;
        async fn profile(&self, token: &str) -> Result<UserProfile>;
        async fn update_password(&self, token: &str, request: &PasswordUpdate) -> Result<StatusMessage>;
        async fn list_chats(&self, token: &str) -> Result<Vec<ChatSummary>>;
        async fn create_chat(&self, token: &str, payload: &ChatPayload) -> Result<CreatedChat>;
        async fn delete_chat(&self, token: &str, id: &str) -> Result<Vec<ChatSummary>>;
        async fn chat_history(&self, token: &str, id: &str) -> Result<Vec<ChatMessage>>;
        async fn send_message(&self, token: &str, id: &str, payload: &ChatPayload) -> Result<Vec<ChatMessage>>;
    }
}

/// A mock with no expectations; any call fails the test.
pub fn untouched() -> MockApi {
    MockApi::new()
}

pub fn summary(id: &str, title: &str) -> ChatSummary {
    ChatSummary {
        id: id.to_string(),
        title: title.to_string(),
    }
}

pub fn message(sender: Sender, text: &str) -> ChatMessage {
    ChatMessage {
        sender,
        message: Some(text.to_string()),
        images: vec![],
        videos: vec![],
        pdfs: vec![],
        timestamp: Utc.with_ymd_and_hms(2024, 11, 3, 9, 30, 0).unwrap(),
    }
}

pub fn created(id: &str, title: &str) -> CreatedChat {
    CreatedChat {
        id: id.to_string(),
        title: title.to_string(),
        response: Some("Analysis complete.".to_string()),
        images: vec![],
        videos: vec![],
        pdfs: vec![],
    }
}

pub fn profile(name: &str, position: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "position": position,
        "isAdmin": false,
        "createdAt": "2024-10-01T08:00:00",
        "totalContexts": 4,
    }))
    .unwrap()
}
