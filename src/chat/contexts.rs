//! Sidebar list of analysis contexts.

use crate::api::ShaktiApi;
use crate::notice::Notice;
use crate::routes::Route;
use crate::types::ChatSummary;
use tracing::warn;

/// Outcome of deleting a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    /// The list the backend reports after deletion.
    pub remaining: Vec<ChatSummary>,
    /// Set when the deleted context was the one on screen.
    pub redirect: Option<Route>,
}

/// Fetch the user's contexts. `Ok(None)` when signed out; the list is then
/// left as it is.
pub async fn fetch_chats<A>(api: &A, token: Option<&str>) -> Result<Option<Vec<ChatSummary>>, Notice>
where
    A: ShaktiApi + ?Sized,
{
    let Some(token) = token else {
        return Ok(None);
    };

    api.list_chats(token).await.map(Some).map_err(|e| {
        warn!(error = %e, "failed to fetch chats");
        Notice::error("Failed to load recent analyses.")
    })
}

pub async fn delete_chat<A>(
    api: &A,
    token: Option<&str>,
    id: &str,
    current: Option<&str>,
) -> Result<Deletion, Notice>
where
    A: ShaktiApi + ?Sized,
{
    let token = token.ok_or_else(|| Notice::auth_required("Please log in to manage analyses."))?;

    let mut remaining = api.delete_chat(token, id).await.map_err(|e| {
        warn!(id, error = %e, "failed to delete chat");
        Notice::error("Failed to delete analysis. Please try again.")
    })?;
    remaining.retain(|c| c.id != id);

    Ok(Deletion {
        remaining,
        redirect: (current == Some(id)).then_some(Route::Dashboard),
    })
}

/// Owned sidebar state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatList {
    chats: Vec<ChatSummary>,
}

impl ChatList {
    pub fn new(chats: Vec<ChatSummary>) -> Self {
        Self { chats }
    }

    pub fn chats(&self) -> &[ChatSummary] {
        &self.chats
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChatSummary> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub async fn refresh<A>(&mut self, api: &A, token: Option<&str>) -> Result<(), Notice>
    where
        A: ShaktiApi + ?Sized,
    {
        if let Some(chats) = fetch_chats(api, token).await? {
            self.chats = chats;
        }
        Ok(())
    }

    /// Delete `id` and adopt the backend's remaining list. Returns where to
    /// navigate, if anywhere.
    pub async fn delete<A>(
        &mut self,
        api: &A,
        token: Option<&str>,
        id: &str,
        current: Option<&str>,
    ) -> Result<Option<Route>, Notice>
    where
        A: ShaktiApi + ?Sized,
    {
        let deletion = delete_chat(api, token, id, current).await?;
        Ok(self.apply(deletion))
    }

    pub fn apply(&mut self, deletion: Deletion) -> Option<Route> {
        self.chats = deletion.remaining;
        deletion.redirect
    }
}
