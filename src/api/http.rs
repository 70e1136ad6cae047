//! `reqwest` implementation of [`ShaktiApi`].

use super::{bearer, endpoints, url, ShaktiApi, DEFAULT_API_BASE};
use crate::types::{
    AuthRequest, AuthResponse, ChatHistory, ChatMessage, ChatPayload, ChatSummary, ClientError,
    CreatedChat, PasswordUpdate, Result, StatusMessage, UserProfile,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client whose requests give up after `timeout`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let target = url(&self.base_url, path);
        debug!(%method, url = %target, "api request");
        let req = self.client.request(method, target);
        match token {
            Some(t) => req.header(reqwest::header::AUTHORIZATION, bearer(t)),
            None => req,
        }
    }

    async fn send<R: DeserializeOwned>(&self, req: RequestBuilder) -> Result<R> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = ClientError::from_response(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %err, "api request failed");
            return Err(err);
        }

        resp.json::<R>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, token: &str) -> Result<R> {
        self.send(self.request(Method::GET, path, Some(token))).await
    }

    async fn post<T, R>(&self, path: &str, body: &T, token: Option<&str>) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path, token).json(body))
            .await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ShaktiApi for HttpClient {
    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse> {
        self.post(endpoints::LOGIN, request, None).await
    }

    async fn signup(&self, request: &AuthRequest) -> Result<AuthResponse> {
        self.post(endpoints::SIGNUP, request, None).await
    }

    async fn profile(&self, token: &str) -> Result<UserProfile> {
        self.get(endpoints::USER, token).await
    }

    async fn update_password(
        &self,
        token: &str,
        request: &PasswordUpdate,
    ) -> Result<StatusMessage> {
        self.post(endpoints::USER_UPDATE, request, Some(token)).await
    }

    async fn list_chats(&self, token: &str) -> Result<Vec<ChatSummary>> {
        self.get(endpoints::CONTEXTS, token).await
    }

    async fn create_chat(&self, token: &str, payload: &ChatPayload) -> Result<CreatedChat> {
        self.post(endpoints::CONTEXTS, payload, Some(token)).await
    }

    async fn delete_chat(&self, token: &str, id: &str) -> Result<Vec<ChatSummary>> {
        let req = self.request(Method::DELETE, &endpoints::context(id), Some(token));
        self.send(req).await
    }

    async fn chat_history(&self, token: &str, id: &str) -> Result<Vec<ChatMessage>> {
        let history: ChatHistory = self.get(&endpoints::chat(id), token).await?;
        Ok(history.chats)
    }

    async fn send_message(
        &self,
        token: &str,
        id: &str,
        payload: &ChatPayload,
    ) -> Result<Vec<ChatMessage>> {
        self.post(&endpoints::chat(id), payload, Some(token)).await
    }
}
