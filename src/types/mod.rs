use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============= Auth Types =============

/// Body of `/api/auth/login` and `/api/auth/signup`.
///
/// The backend accepts the same shape for both; `name` and `position` are
/// ignored on login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

// ============= User Types =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_contexts: u64,
    #[serde(default = "default_job_title")]
    pub job_title: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

fn default_job_title() -> String {
    "Default".to_string()
}

fn default_location() -> String {
    "India".to_string()
}

/// Body of `/api/user/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    pub email: String,
    pub current_password: String,
    pub new_password: String,
}

/// Plain `{"msg": ...}` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub msg: String,
}

// ============= Chat Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single entry of a conversation as stored by the backend.
///
/// Media fields hold backend file names, resolved against the static
/// `/images`, `/videos` and `/pdfs` routes for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub videos: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pdfs: Vec<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || !self.videos.is_empty() || !self.pdfs.is_empty()
    }

    /// Images and videos share the grid; pdfs are listed separately.
    pub fn visual_count(&self) -> usize {
        self.images.len() + self.videos.len()
    }

    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Sidebar entry for one analysis context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
}

/// Body posted when creating a context or appending to one.
///
/// Media entries are the base64 bodies of the local data URLs, without the
/// `data:<mime>;base64,` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    pub message: Option<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub pdfs: Vec<String>,
}

impl ChatPayload {
    pub fn has_attachments(&self) -> bool {
        !self.images.is_empty() || !self.videos.is_empty() || !self.pdfs.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && !self.has_attachments()
    }
}

/// Response of `POST /api/chat/context`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedChat {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub videos: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pdfs: Vec<String>,
}

/// Response of `GET /api/chat/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatHistory {
    #[serde(default)]
    pub chats: Vec<ChatMessage>,
}

// ============= Error Types =============

/// Error body returned by the backend. FastAPI reports `detail`, which is
/// a string for raised HTTP errors and a list for validation failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => self.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Authentication error: {0}")]
    Unauthorized(String),

    #[error("Request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("No session token")]
    MissingToken,
}

impl ClientError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("status {}", status)
                } else {
                    body.trim().to_string()
                }
            });

        match status {
            401 | 403 => ClientError::Unauthorized(detail),
            _ => ClientError::Status { status, detail },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_) | ClientError::MissingToken)
    }

    /// Backend-provided explanation, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized(d) | ClientError::Status { detail: d, .. } => Some(d),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

// ============= Serde helpers =============

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an RFC 3339 timestamp, or a naive ISO timestamp taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_message_null_media() {
        let msg: ChatMessage = serde_json::from_value(json!({
            "sender": "bot",
            "message": "Two vehicles detected.",
            "images": null,
            "timestamp": "2024-11-02T10:15:30.123000"
        }))
        .unwrap();

        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.images.is_empty());
        assert!(msg.videos.is_empty());
        assert!(!msg.has_media());
        assert_eq!(msg.timestamp.to_rfc3339(), "2024-11-02T10:15:30.123+00:00");
    }

    #[test]
    fn test_chat_message_rfc3339_timestamp() {
        let msg: ChatMessage = serde_json::from_value(json!({
            "sender": "user",
            "message": null,
            "images": ["a.png", "b.png"],
            "videos": ["c.mp4"],
            "pdfs": [],
            "timestamp": "2024-11-02T10:15:30+05:30"
        }))
        .unwrap();

        assert!(msg.is_user());
        assert_eq!(msg.visual_count(), 3);
        assert_eq!(msg.text(), "");
        assert_eq!(msg.timestamp.to_rfc3339(), "2024-11-02T04:45:30+00:00");
    }

    #[test]
    fn test_payload_serializes_null_message() {
        let payload = ChatPayload {
            message: None,
            images: vec!["aGVsbG8=".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["message"], serde_json::Value::Null);
        assert_eq!(value["images"][0], "aGVsbG8=");
        assert!(!payload.is_empty());
        assert!(ChatPayload::default().is_empty());
    }

    #[test]
    fn test_profile_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Ryan",
            "email": "ryan@example.com",
            "position": "Major",
            "isAdmin": true,
            "createdAt": "2024-10-01T08:00:00",
            "totalContexts": 4
        }))
        .unwrap();

        assert!(profile.is_admin);
        assert_eq!(profile.total_contexts, 4);
        assert_eq!(profile.job_title, "Default");
        assert_eq!(profile.location, "India");
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn test_password_update_field_names() {
        let body = PasswordUpdate {
            email: "a@b.io".to_string(),
            current_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["currentPassword"], "old");
        assert_eq!(value["newPassword"], "new");
    }

    #[test]
    fn test_error_from_response_detail() {
        let err = ClientError::from_response(400, r#"{"detail":"Invalid password"}"#);
        assert_eq!(
            err,
            ClientError::Status {
                status: 400,
                detail: "Invalid password".to_string()
            }
        );
        assert_eq!(err.detail(), Some("Invalid password"));
    }

    #[test]
    fn test_error_from_response_unauthorized() {
        let err = ClientError::from_response(401, r#"{"detail":"Not authenticated"}"#);
        assert!(err.is_unauthorized());

        let err = ClientError::from_response(403, "");
        assert_eq!(err, ClientError::Unauthorized("status 403".to_string()));
    }

    #[test]
    fn test_error_from_response_plain_body() {
        let err = ClientError::from_response(500, "Internal Server Error");
        assert_eq!(err.detail(), Some("Internal Server Error"));
    }
}
