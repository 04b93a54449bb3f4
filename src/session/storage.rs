//! Durable mirror of the session in `localStorage` and the `user_info` cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The in-memory session is rebuilt from these keys on every page load, and
//! the social-login redirect hands its token over through the cookie. Both
//! backends sit behind small traits so the session service can run against
//! in-memory fakes outside the browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is best-effort: a missing window or a storage quota error
//! degrades to "nothing stored" instead of surfacing to the UI, the same way
//! preference persistence behaves elsewhere in the client.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::profile::UserProfile;

pub const KEY_USER_PROFILE: &str = "user_profile";
pub const KEY_ID_USER: &str = "id_user";
pub const KEY_IS_LOGIN: &str = "is_login";
/// Cookie the backend sets after a social-login redirect.
pub const SESSION_COOKIE: &str = "user_info";

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Access to the page's cookie string with `document.cookie` semantics:
/// reads return every visible `name=value` pair joined by `"; "`, writes take
/// one `Set-Cookie`-style string.
pub trait CookieJar {
    fn raw(&self) -> String;
    fn write(&self, cookie: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<T: CookieJar + ?Sized> CookieJar for Arc<T> {
    fn raw(&self) -> String {
        (**self).raw()
    }

    fn write(&self, cookie: &str) {
        (**self).write(cookie);
    }
}

/// Parse a `document.cookie` string into name/value pairs.
///
/// Pairs are separated by `"; "` and split at the first `=`, so base64
/// padding in values survives. Segments without `=` are skipped; later
/// duplicates win.
#[must_use]
pub fn parse_cookies(raw: &str) -> HashMap<String, String> {
    raw.split("; ")
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}

/// Cookie string that expires `name` immediately. The attributes must match
/// the ones the backend set or the browser keeps the original cookie.
#[must_use]
pub fn expire_cookie(name: &str, domain: &str) -> String {
    format!("{name}=; Path=/; Domain={domain}; Max-Age=0; SameSite=None; Secure")
}

/// Session persistence over a key/value store and a cookie jar.
#[derive(Debug, Clone)]
pub struct PersistedSessionStore<S, C> {
    storage: S,
    cookies: C,
    cookie_domain: String,
}

impl<S: KeyValueStore, C: CookieJar> PersistedSessionStore<S, C> {
    pub fn new(storage: S, cookies: C, cookie_domain: impl Into<String>) -> Self {
        Self { storage, cookies, cookie_domain: cookie_domain.into() }
    }

    /// Write the profile, its id and the login flag.
    ///
    /// Profiles without a `UserID` are rejected with a warning; persisting
    /// them would leave an `id_user` that disagrees with the profile.
    pub fn save(&self, profile: &UserProfile) {
        let Some(id_user) = profile.user_id() else {
            log::warn!("refusing to persist profile without UserID");
            return;
        };
        let raw = match serde_json::to_string(profile) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("failed to serialize user profile: {e}");
                return;
            }
        };
        self.storage.set(KEY_USER_PROFILE, &raw);
        self.storage.set(KEY_ID_USER, &id_user);
        self.storage.set(KEY_IS_LOGIN, "true");
    }

    /// Remove all persisted keys and expire the session cookie.
    pub fn clear(&self) {
        self.storage.remove(KEY_USER_PROFILE);
        self.storage.remove(KEY_ID_USER);
        self.storage.remove(KEY_IS_LOGIN);
        self.cookies.write(&expire_cookie(SESSION_COOKIE, &self.cookie_domain));
    }

    /// Value of cookie `name`, or `None` when it is missing, empty, or there
    /// are no cookies at all.
    pub fn read_cookie(&self, name: &str) -> Option<String> {
        let raw = self.cookies.raw();
        if raw.is_empty() {
            return None;
        }
        parse_cookies(&raw).remove(name).filter(|v| !v.is_empty())
    }

    /// Rehydrate `(id_user, profile)` from storage.
    ///
    /// Requires both keys and a profile with a `UserID`. A stale `id_user`
    /// that disagrees with the stored profile is overridden by the profile.
    pub fn load(&self) -> Option<(String, UserProfile)> {
        let stored_id = self.storage.get(KEY_ID_USER).filter(|id| !id.is_empty())?;
        let raw = self.storage.get(KEY_USER_PROFILE)?;
        let profile: UserProfile = match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("discarding unreadable stored profile: {e}");
                return None;
            }
        };
        let id_user = profile.user_id()?;
        if id_user != stored_id {
            log::warn!("stored id_user {stored_id} disagrees with profile UserID {id_user}");
        }
        Some((id_user, profile))
    }

    /// Persisted login flag, as read by the home screen.
    pub fn is_login(&self) -> bool {
        self.storage.get(KEY_IS_LOGIN).is_some_and(|v| v == "true")
    }
}

/// In-memory [`KeyValueStore`] for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// In-memory [`CookieJar`]. Writes with `Max-Age=0` delete the cookie; other
/// attributes are accepted and dropped.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    jar: Mutex<Vec<(String, String)>>,
    writes: Mutex<Vec<String>>,
}

impl MemoryCookies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cookie strings written so far, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl CookieJar for MemoryCookies {
    fn raw(&self) -> String {
        self.jar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, cookie: &str) {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).push(cookie.to_owned());

        let mut parts = cookie.split(';').map(str::trim);
        let Some((name, value)) = parts.next().and_then(|p| p.split_once('=')) else {
            return;
        };
        let expired = parts.any(|attr| attr.eq_ignore_ascii_case("max-age=0"));

        let mut jar = self.jar.lock().unwrap_or_else(PoisonError::into_inner);
        jar.retain(|(n, _)| n != name);
        if !expired {
            jar.push((name.to_owned(), value.to_owned()));
        }
    }
}

/// `window.localStorage`. Outside the browser every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected write for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// `document.cookie`. Outside the browser reads are empty and writes no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieJar for BrowserCookies {
    fn raw(&self) -> String {
        #[cfg(feature = "csr")]
        {
            html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn write(&self, cookie: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(cookie);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = cookie;
        }
    }
}

/// Store wired to the real browser backends.
pub type BrowserSessionStore = PersistedSessionStore<BrowserStorage, BrowserCookies>;
