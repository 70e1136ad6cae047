//! API client for communicating with the SHAKTI backend

use shakti::api::DEFAULT_API_BASE;
#[cfg(target_arch = "wasm32")]
use {
    async_trait::async_trait,
    gloo_net::http::{Method, RequestBuilder, Response},
    serde::{de::DeserializeOwned, Serialize},
    shakti::api::{bearer, endpoints, url, ShaktiApi},
    shakti::types::{
        AuthRequest, AuthResponse, ChatHistory, ChatMessage, ChatPayload, ChatSummary,
        ClientError, CreatedChat, PasswordUpdate, Result, StatusMessage, UserProfile,
    },
};

/// Backend location, fixed at build time.
pub const API_BASE: &str = match option_env!("SHAKTI_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

/// `gloo-net` implementation of [`ShaktiApi`].
#[derive(Debug, Clone)]
pub struct GlooClient {
    base_url: String,
}

impl Default for GlooClient {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl GlooClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// gloo futures are not Send, so the transport only exists in the browser
#[cfg(target_arch = "wasm32")]
impl GlooClient {
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let target = url(&self.base_url, path);
        tracing::debug!(%method, url = %target, "api request");
        let req = RequestBuilder::new(&target).method(method);
        match token {
            Some(t) => req.header("Authorization", &bearer(t)),
            None => req,
        }
    }

    async fn read<R: DeserializeOwned>(resp: Response) -> Result<R> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let err = ClientError::from_response(status, &body);
            tracing::warn!(status, error = %err, "api request failed");
            return Err(err);
        }

        resp.json::<R>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, token: &str) -> Result<R> {
        let resp = self
            .request(Method::GET, path, Some(token))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read(resp).await
    }

    async fn post<T, R>(&self, path: &str, body: &T, token: Option<&str>) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self
            .request(Method::POST, path, token)
            .json(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read(resp).await
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ShaktiApi for GlooClient {
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
        let resp = self
            .request(Method::DELETE, &endpoints::context(id), Some(token))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::read(resp).await
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
