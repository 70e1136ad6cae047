//! Login and signup
//!
//! Validates the form locally, posts it, and hands back the access token
//! for the caller to store.

use crate::api::ShaktiApi;
use crate::notice::Notice;
use crate::routes::Route;
use crate::session::TokenStore;
use crate::types::AuthRequest;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub position: String,
}

impl AuthForm {
    pub fn validate(&self, mode: AuthMode) -> Result<(), Notice> {
        if !is_valid_email(self.email.trim()) {
            return Err(Notice::destructive(
                "Invalid Email",
                "Please enter a valid email address.",
            ));
        }
        if mode == AuthMode::Signup && self.name.trim().is_empty() {
            return Err(Notice::destructive(
                "Name Required",
                "Please enter your name for signup.",
            ));
        }
        Ok(())
    }

    pub fn request(&self) -> AuthRequest {
        AuthRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub token: String,
    pub notice: Notice,
}

impl SignedIn {
    pub fn redirect(&self) -> Route {
        Route::Dashboard
    }
}

pub async fn authenticate<A>(api: &A, mode: AuthMode, form: &AuthForm) -> Result<SignedIn, Notice>
where
    A: ShaktiApi + ?Sized,
{
    form.validate(mode)?;

    let request = form.request();
    let result = match mode {
        AuthMode::Login => api.login(&request).await,
        AuthMode::Signup => api.signup(&request).await,
    };

    match result {
        Ok(auth) => {
            info!(email = %request.email, ?mode, "authenticated");
            let title = match mode {
                AuthMode::Login => "Login Successful",
                AuthMode::Signup => "Signup Successful",
            };
            Ok(SignedIn {
                token: auth.access_token,
                notice: Notice::info(title, "Redirecting to dashboard..."),
            })
        }
        Err(e) => {
            warn!(error = %e, ?mode, "authentication failed");
            let description = e
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| "An unexpected error occurred".to_string());
            Err(Notice::error(description))
        }
    }
}

/// Authenticate and persist the token.
pub async fn sign_in<A, S>(
    api: &A,
    store: &S,
    mode: AuthMode,
    form: &AuthForm,
) -> Result<SignedIn, Notice>
where
    A: ShaktiApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let signed_in = authenticate(api, mode, form).await?;
    store.save(&signed_in.token).map_err(|e| {
        warn!(error = %e, "failed to store session token");
        Notice::error("Could not store the session. Please try again.")
    })?;
    Ok(signed_in)
}

/// Drop the session token. Always lands on the auth view.
pub fn sign_out<S>(store: &S) -> Route
where
    S: TokenStore + ?Sized,
{
    if let Err(e) = store.clear() {
        warn!(error = %e, "failed to clear session token");
    }
    Route::Auth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@example.c"));
    }

    #[test]
    fn test_signup_requires_name() {
        let form = AuthForm {
            email: "john@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(form.validate(AuthMode::Login).is_ok());
        assert_eq!(
            form.validate(AuthMode::Signup).unwrap_err().title,
            "Name Required"
        );
    }
}
