//! Client-side session: token codec, persisted mirror, state and service.
//!
//! ARCHITECTURE
//! ============
//! `profile` and `codec` are pure; `storage` owns browser persistence;
//! `state` is the in-memory value; `service` ties them to the remote API;
//! `bootstrap` recovers a session when the login screen mounts.

pub mod bootstrap;
pub mod codec;
pub mod profile;
pub mod service;
pub mod state;
pub mod storage;

use crate::config::AppConfig;
use crate::net::api::HttpAuthApi;

/// Session service wired to `gloo-net`, `localStorage` and `document.cookie`.
pub type AppSession = service::SessionService<HttpAuthApi, storage::BrowserStorage, storage::BrowserCookies>;

/// Build the browser session service from config, rehydrating from storage.
pub fn browser_session(config: &AppConfig) -> AppSession {
    let store: storage::BrowserSessionStore = storage::PersistedSessionStore::new(
        storage::BrowserStorage,
        storage::BrowserCookies,
        config.cookie_domain.clone(),
    );
    service::SessionService::new(HttpAuthApi::new(config.api_base_url.clone()), store)
}
