//! Session token kept in the `token` cookie.

use shakti::session::{SessionError, TokenStore, TOKEN_KEY};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// One week, matching the backend's token lifetime.
const MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, Default)]
pub struct CookieTokenStore;

fn document() -> Result<HtmlDocument, SessionError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| SessionError::Storage("document is not available".to_string()))
}

fn write(value: &str) -> Result<(), SessionError> {
    document()?
        .set_cookie(value)
        .map_err(|e| SessionError::Storage(format!("{:?}", e)))
}

/// Find `name` in a `document.cookie` string.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

impl TokenStore for CookieTokenStore {
    fn load(&self) -> Option<String> {
        let cookies = document().ok()?.cookie().ok()?;
        find_cookie(&cookies, TOKEN_KEY)
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        write(&format!(
            "{}={}; path=/; max-age={}; SameSite=Lax",
            TOKEN_KEY, token, MAX_AGE_SECS
        ))
    }

    fn clear(&self) -> Result<(), SessionError> {
        write(&format!("{}=; path=/; max-age=0", TOKEN_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie() {
        let cookies = "theme=dark; token=abc.def; other=1";
        assert_eq!(find_cookie(cookies, "token").as_deref(), Some("abc.def"));
        assert_eq!(find_cookie(cookies, "missing"), None);
        assert_eq!(find_cookie("token=", "token"), None);
    }
}
