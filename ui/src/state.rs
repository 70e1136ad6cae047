//! Global application state

use crate::api::GlooClient;
use crate::cookie::CookieTokenStore;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shakti::chat::contexts::fetch_chats;
use shakti::profile::current_user;
use shakti::session::TokenStore;
use shakti::types::{ChatSummary, UserProfile};
use shakti::Notice;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub notice: Notice,
}

/// Global application state. Only the token is persisted; everything else
/// is refetched from the backend.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session token mirrored from the cookie
    pub token: RwSignal<Option<String>>,
    /// Signed-in user, when the token is valid
    pub user: RwSignal<Option<UserProfile>>,
    /// Sidebar entries
    pub chats: RwSignal<Vec<ChatSummary>>,
    /// Visible notices
    pub toasts: RwSignal<Vec<Toast>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(CookieTokenStore.load()),
            user: RwSignal::new(None),
            chats: RwSignal::new(vec![]),
            toasts: RwSignal::new(vec![]),
        }
    }

    pub fn api(&self) -> GlooClient {
        GlooClient::default()
    }

    pub fn clear_auth(&self) {
        shakti::auth::sign_out(&CookieTokenStore);
        self.token.set(None);
        self.user.set(None);
        self.chats.set(vec![]);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Show a notice; it dismisses itself after a few seconds.
    pub fn notify(&self, notice: Notice) {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.update(|t| {
            t.push(Toast {
                id: id.clone(),
                notice,
            })
        });

        let toasts = self.toasts;
        Timeout::new(TOAST_MS, move || {
            toasts.update(|t| t.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    /// Refetch the signed-in user for the navbar and menus.
    pub fn load_user(&self) {
        let state = *self;
        spawn_local(async move {
            let token = state.token.get_untracked();
            let user = current_user(&state.api(), token.as_deref()).await;
            state.user.set(user);
        });
    }

    /// Refetch the sidebar list. Signed out leaves it alone.
    pub fn load_chats(&self) {
        let state = *self;
        spawn_local(async move {
            let token = state.token.get_untracked();
            match fetch_chats(&state.api(), token.as_deref()).await {
                Ok(Some(chats)) => state.chats.set(chats),
                Ok(None) => {}
                Err(notice) => state.notify(notice),
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
