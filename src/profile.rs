//! Account display and password change.

use crate::api::ShaktiApi;
use crate::notice::Notice;
use crate::types::{PasswordUpdate, UserProfile};
use tracing::warn;

/// Loads the profile for the user page; missing or failed loads surface a
/// notice.
pub async fn load_profile<A>(api: &A, token: Option<&str>) -> Result<UserProfile, Notice>
where
    A: ShaktiApi + ?Sized,
{
    let token =
        token.ok_or_else(|| Notice::auth_required("Please log in to view this page."))?;

    api.profile(token).await.map_err(|e| {
        warn!(error = %e, "failed to load profile");
        Notice::error("Failed to load user data. Please try again.")
    })
}

/// Fetch the profile for headers and menus, where being signed out or a
/// failed request just means showing the guest fallbacks.
pub async fn current_user<A>(api: &A, token: Option<&str>) -> Option<UserProfile>
where
    A: ShaktiApi + ?Sized,
{
    let token = token?;
    match api.profile(token).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!(error = %e, "failed to fetch user data");
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
}

impl PasswordForm {
    pub fn clear(&mut self) {
        self.current.clear();
        self.new.clear();
    }
}

pub async fn change_password<A>(
    api: &A,
    token: Option<&str>,
    email: &str,
    form: &PasswordForm,
) -> Result<Notice, Notice>
where
    A: ShaktiApi + ?Sized,
{
    let token = token
        .ok_or_else(|| Notice::auth_required("Please log in to update your password."))?;

    let request = PasswordUpdate {
        email: email.to_string(),
        current_password: form.current.clone(),
        new_password: form.new.clone(),
    };

    match api.update_password(token, &request).await {
        Ok(_) => Ok(Notice::info(
            "Password updated",
            "Your password has been successfully changed.",
        )),
        Err(e) => {
            warn!(error = %e, "failed to update password");
            Err(Notice::error("Failed to update password. Please try again."))
        }
    }
}

/// Name, email and position as shown in the user menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub name: String,
    pub email: String,
    pub position: String,
    pub signed_in: bool,
}

impl UserBadge {
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        match profile {
            Some(p) => Self {
                name: p.name.clone(),
                email: p.email.clone(),
                position: if p.position.is_empty() {
                    "N/A".to_string()
                } else {
                    p.position.clone()
                },
                signed_in: true,
            },
            None => Self {
                name: "Guest".to_string(),
                email: "Not logged in".to_string(),
                position: "N/A".to_string(),
                signed_in: false,
            },
        }
    }

    /// First letter of the name, for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Dashboard heading.
pub fn greeting(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) if p.position.is_empty() => format!("How may I assist you today, {}?", p.name),
        Some(p) => format!("How may I assist you today, {} {}?", p.position, p.name),
        None => "Please login to start a new analysis.".to_string(),
    }
}
