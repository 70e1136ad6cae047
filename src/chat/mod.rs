//! Chat session controller
//!
//! A session is either a new analysis being composed or an existing
//! context whose history is loaded and appended to. Every failure is
//! reported as a [`Notice`]; nothing is retried.
//!
//! The async functions take owned payloads and return results instead of
//! mutating state, so the browser UI can call them from `spawn_local` and
//! apply the outcome to its signals. [`ChatSession`] wraps them for callers
//! that own their state outright.

pub mod contexts;

pub use contexts::{ChatList, Deletion};

use crate::api::ShaktiApi;
use crate::media::UploadBatch;
use crate::notice::Notice;
use crate::routes::Route;
use crate::types::{ChatMessage, ChatPayload};
use tracing::{debug, warn};

/// Message text and attachments awaiting send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub text: String,
    pub uploads: UploadBatch,
}

impl Composer {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.uploads.is_empty()
    }

    pub fn payload(&self) -> ChatPayload {
        self.uploads.to_payload(&self.text)
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.uploads.clear();
    }
}

/// Result of starting a new analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedChat {
    pub id: String,
    pub title: String,
    pub notice: Notice,
}

impl StartedChat {
    pub fn route(&self) -> Route {
        Route::Chat(self.id.clone())
    }
}

fn input_required() -> Notice {
    Notice::destructive(
        "Input required",
        "Please enter a message or upload images/videos to start a new analysis.",
    )
}

fn start_auth_required() -> Notice {
    Notice::auth_required("Please log in to start a new analysis.")
}

/// Create a context from the composed payload.
pub async fn start_analysis<A>(
    api: &A,
    token: Option<&str>,
    payload: &ChatPayload,
) -> Result<StartedChat, Notice>
where
    A: ShaktiApi + ?Sized,
{
    if payload.is_empty() {
        return Err(input_required());
    }
    let token = token.ok_or_else(start_auth_required)?;

    match api.create_chat(token, payload).await {
        Ok(created) => {
            debug!(id = %created.id, "analysis started");
            Ok(StartedChat {
                id: created.id,
                title: created.title,
                notice: Notice::info(
                    "Analysis Started",
                    "Your request has been sent for processing.",
                ),
            })
        }
        Err(e) if e.is_unauthorized() => {
            warn!(error = %e, "token rejected while starting analysis");
            Err(start_auth_required())
        }
        Err(e) => {
            warn!(error = %e, "failed to start analysis");
            Err(Notice::error("Failed to start new analysis. Please try again."))
        }
    }
}

/// Load the full history of a context.
pub async fn fetch_history<A>(
    api: &A,
    token: Option<&str>,
    chat_id: &str,
) -> Result<Vec<ChatMessage>, Notice>
where
    A: ShaktiApi + ?Sized,
{
    let token =
        token.ok_or_else(|| Notice::auth_required("Please log in to view chat history."))?;

    api.chat_history(token, chat_id).await.map_err(|e| {
        warn!(chat_id, error = %e, "failed to load chat history");
        Notice::error("Failed to load chat history. Please try again.")
    })
}

/// Append a message to an existing context. `Ok(None)` when there was
/// nothing to send.
pub async fn post_message<A>(
    api: &A,
    token: Option<&str>,
    chat_id: &str,
    payload: &ChatPayload,
) -> Result<Option<Vec<ChatMessage>>, Notice>
where
    A: ShaktiApi + ?Sized,
{
    if payload.is_empty() {
        return Ok(None);
    }
    let token = token.ok_or_else(|| Notice::auth_required("Please log in to send messages."))?;

    api.send_message(token, chat_id, payload)
        .await
        .map(Some)
        .map_err(|e| {
            warn!(chat_id, error = %e, "failed to send message");
            Notice::error("Failed to send message. Please try again.")
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMode {
    New,
    Existing { id: String },
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// A new context was created; navigate to it.
    Started(StartedChat),
    /// Messages were appended to the history.
    Appended { count: usize },
    /// Nothing to send.
    Skipped,
}

/// Owned state of one dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    mode: ChatMode,
    history: Vec<ChatMessage>,
    pub composer: Composer,
    loading: bool,
}

impl ChatSession {
    pub fn new_chat() -> Self {
        Self {
            mode: ChatMode::New,
            history: Vec::new(),
            composer: Composer::default(),
            loading: false,
        }
    }

    pub fn existing(id: impl Into<String>) -> Self {
        Self {
            mode: ChatMode::Existing { id: id.into() },
            ..Self::new_chat()
        }
    }

    pub fn mode(&self) -> &ChatMode {
        &self.mode
    }

    pub fn chat_id(&self) -> Option<&str> {
        match &self.mode {
            ChatMode::Existing { id } => Some(id),
            ChatMode::New => None,
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the history with the backend's copy. No-op for new chats.
    pub async fn load<A>(&mut self, api: &A, token: Option<&str>) -> Result<usize, Notice>
    where
        A: ShaktiApi + ?Sized,
    {
        let Some(id) = self.chat_id().map(str::to_string) else {
            return Ok(0);
        };

        self.loading = true;
        let result = fetch_history(api, token, &id).await;
        self.loading = false;

        let messages = result?;
        self.history = messages;
        Ok(self.history.len())
    }

    /// Send the composer's content. On success the composer is cleared;
    /// on failure it is left untouched.
    pub async fn submit<A>(&mut self, api: &A, token: Option<&str>) -> Result<SendOutcome, Notice>
    where
        A: ShaktiApi + ?Sized,
    {
        let payload = self.composer.payload();

        match self.mode.clone() {
            ChatMode::New => {
                self.loading = true;
                let result = start_analysis(api, token, &payload).await;
                self.loading = false;

                let started = result?;
                self.composer.reset();
                Ok(SendOutcome::Started(started))
            }
            ChatMode::Existing { id } => {
                self.loading = true;
                let result = post_message(api, token, &id, &payload).await;
                self.loading = false;

                match result? {
                    Some(messages) => {
                        let count = messages.len();
                        self.history.extend(messages);
                        self.composer.reset();
                        Ok(SendOutcome::Appended { count })
                    }
                    None => Ok(SendOutcome::Skipped),
                }
            }
        }
    }
}
