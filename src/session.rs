//! Session
//!
//! Login state kept in cookies (`token`, `user`, `isAdmin`) so it survives
//! reloads, mirrored in a signal for the UI.

use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use recipe_core::Authorization;
use wasm_bindgen::JsCast;

const TOKEN_COOKIE: &str = "token";
const USER_COOKIE: &str = "user";
const ADMIN_COOKIE: &str = "isAdmin";

/// Characters not allowed raw in a cookie value
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

/// Cookie lifetime in seconds (one week)
const COOKIE_MAX_AGE: u32 = 7 * 24 * 60 * 60;

/// A logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
    pub user_id: i64,
    pub is_admin: bool,
}

impl AuthState {
    pub fn from_authorization(auth: &Authorization) -> Self {
        Self {
            token: auth.access_token.clone(),
            user_id: auth.user_id,
            is_admin: auth.is_admin,
        }
    }

    /// Rebuild from a `document.cookie` string
    pub fn from_cookies(cookies: &str) -> Option<Self> {
        let token = cookie_value(cookies, TOKEN_COOKIE).filter(|t| !t.is_empty())?;
        let user_id = cookie_value(cookies, USER_COOKIE)?.parse().ok()?;
        let is_admin = cookie_value(cookies, ADMIN_COOKIE).is_some_and(|v| v == "true");
        Some(Self { token, user_id, is_admin })
    }

    fn cookie_pairs(&self) -> [(&'static str, String); 3] {
        [
            (TOKEN_COOKIE, self.token.clone()),
            (USER_COOKIE, self.user_id.to_string()),
            (ADMIN_COOKIE, self.is_admin.to_string()),
        ]
    }
}

/// Value of one cookie from a `name=value; name2=value2` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// `Set-Cookie` style assignment for `document.cookie`
pub fn cookie_assignment(name: &str, value: &str, max_age: u32) -> String {
    format!(
        "{name}={}; path=/; max-age={max_age}; SameSite=Lax",
        utf8_percent_encode(value, COOKIE_VALUE)
    )
}

pub fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Console line for a rejected cookie write, tagged with the caller
pub fn cookie_write_failure(tag: &str, assignment: &str) -> String {
    let name = assignment.split('=').next().unwrap_or_default();
    format!("[{tag}] Failed to write cookie {name}")
}

/// Set a cookie, logging failures under `tag`
pub fn write_cookie(tag: &str, assignment: &str) {
    if let Some(document) = html_document() {
        if document.set_cookie(assignment).is_err() {
            web_sys::console::log_1(&cookie_write_failure(tag, assignment).into());
        }
    }
}

/// Reactive login state
#[derive(Clone, Copy)]
pub struct Session {
    auth: RwSignal<Option<AuthState>>,
}

impl Session {
    /// Restore from the browser's cookies
    pub fn restore() -> Self {
        let auth = html_document()
            .and_then(|document| document.cookie().ok())
            .and_then(|cookies| AuthState::from_cookies(&cookies));
        if auth.is_some() {
            web_sys::console::log_1(&"[SESSION] Restored login from cookies".into());
        }
        Self { auth: RwSignal::new(auth) }
    }

    pub fn token(&self) -> Option<String> {
        self.auth.with_untracked(|auth| auth.as_ref().map(|a| a.token.clone()))
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.auth.with(|auth| auth.as_ref().is_some_and(|a| a.is_admin))
    }

    pub fn user_id(&self) -> Option<i64> {
        self.auth.with(|auth| auth.as_ref().map(|a| a.user_id))
    }

    pub fn log_in(&self, auth: AuthState) {
        for (name, value) in auth.cookie_pairs() {
            write_cookie("SESSION", &cookie_assignment(name, &value, COOKIE_MAX_AGE));
        }
        web_sys::console::log_1(&format!("[SESSION] Logged in as user {}", auth.user_id).into());
        self.auth.set(Some(auth));
    }

    pub fn log_out(&self) {
        for name in [TOKEN_COOKIE, USER_COOKIE, ADMIN_COOKIE] {
            write_cookie("SESSION", &cookie_assignment(name, "", 0));
        }
        web_sys::console::log_1(&"[SESSION] Logged out".into());
        self.auth.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "theme=dark; token=abc.def; user=12; isAdmin=true";

        assert_eq!(cookie_value(cookies, "token").as_deref(), Some("abc.def"));
        assert_eq!(cookie_value(cookies, "user").as_deref(), Some("12"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_auth_from_cookies() {
        let auth = AuthState::from_cookies("token=t0k; user=3; isAdmin=false").unwrap();
        assert_eq!(auth, AuthState { token: "t0k".into(), user_id: 3, is_admin: false });

        assert!(AuthState::from_cookies("user=3").is_none());
        assert!(AuthState::from_cookies("token=; user=3").is_none());
        assert!(AuthState::from_cookies("token=t; user=abc").is_none());
    }

    #[test]
    fn test_cookie_assignment_round_trip() {
        let assignment = cookie_assignment("token", "a b;c%", 60);
        assert!(assignment.starts_with("token=a%20b%3Bc%25;"));
        assert!(assignment.contains("max-age=60"));

        let pair = assignment.split(';').next().unwrap();
        assert_eq!(cookie_value(pair, "token").as_deref(), Some("a b;c%"));
    }
}
