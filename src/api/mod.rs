//! Backend API seam
//!
//! [`ShaktiApi`] lists every endpoint the client calls. The terminal client
//! uses the `reqwest` implementation in [`http`]; the browser UI provides
//! its own over `gloo-net`. Flows are generic over the trait so they can be
//! tested against mocks.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpClient;

use crate::types::{
    AuthRequest, AuthResponse, ChatMessage, ChatPayload, ChatSummary, CreatedChat,
    PasswordUpdate, Result, StatusMessage, UserProfile,
};
use async_trait::async_trait;

/// Default backend location.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Endpoint paths, relative to the API base.
pub mod endpoints {
    pub const LOGIN: &str = "/api/auth/login";
    pub const SIGNUP: &str = "/api/auth/signup";
    pub const USER: &str = "/api/user";
    pub const USER_UPDATE: &str = "/api/user/update";
    pub const CONTEXTS: &str = "/api/chat/context";

    pub fn context(id: &str) -> String {
        format!("{}/{}", CONTEXTS, id)
    }

    pub fn chat(id: &str) -> String {
        format!("/api/chat/{}", id)
    }
}

/// Join an API base and an endpoint path.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ShaktiApi {
    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse>;

    async fn signup(&self, request: &AuthRequest) -> Result<AuthResponse>;

    async fn profile(&self, token: &str) -> Result<UserProfile>;

    async fn update_password(&self, token: &str, request: &PasswordUpdate)
        -> Result<StatusMessage>;

    async fn list_chats(&self, token: &str) -> Result<Vec<ChatSummary>>;

    async fn create_chat(&self, token: &str, payload: &ChatPayload) -> Result<CreatedChat>;

    /// Returns the contexts that remain after deletion.
    async fn delete_chat(&self, token: &str, id: &str) -> Result<Vec<ChatSummary>>;

    async fn chat_history(&self, token: &str, id: &str) -> Result<Vec<ChatMessage>>;

    /// Returns the new messages: the user's echo followed by the reply.
    async fn send_message(
        &self,
        token: &str,
        id: &str,
        payload: &ChatPayload,
    ) -> Result<Vec<ChatMessage>>;
}
