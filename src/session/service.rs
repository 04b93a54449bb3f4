//! Session service: the single owner of auth state.
//!
//! ARCHITECTURE
//! ============
//! Views never touch storage, cookies or the session value directly. They
//! call the service, which runs the remote request, classifies the response
//! into a [`RequestOutcome`], applies the matching [`SessionAction`], keeps the
//! persisted mirror in step, and notifies `on_change` listeners (the app
//! bridges these into a Leptos signal).
//!
//! Stale responses: each request takes a sequence id when issued. A response
//! is applied only if its id is still the latest one issued for that
//! operation; older responses come back as [`RequestOutcome::Superseded`].
//!
//! The lock is never held across an await point or while listeners run.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

use super::profile::UserProfile;
use super::state::{ActivePerInfo, Session, SessionAction};
use super::storage::{CookieJar, KeyValueStore, PersistedSessionStore};
use crate::net::api::AuthApi;
use crate::net::types::{ApiError, ApiResponse, LoginRequest, RequestOutcome};

/// Shown when the server rejects a request without saying why.
pub const DEFAULT_SERVER_ERROR: &str = "Đã xảy ra lỗi, vui lòng thử lại sau!";

/// Remote operations tracked for stale-response detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Logout,
    EditProfile,
    SocialProfile,
}

/// Handle returned by [`SessionService::on_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct Inner {
    session: Session,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    next_seq: u64,
    latest: HashMap<Operation, u64>,
}

pub struct SessionService<A, S, C> {
    api: Arc<A>,
    store: Arc<PersistedSessionStore<S, C>>,
    inner: Arc<Mutex<Inner>>,
}

impl<A, S, C> Clone for SessionService<A, S, C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: Arc::clone(&self.store),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S, C> SessionService<A, S, C>
where
    A: AuthApi,
    S: KeyValueStore,
    C: CookieJar,
{
    /// Build the service, rehydrating the session from durable storage.
    pub fn new(api: A, store: PersistedSessionStore<S, C>) -> Self {
        let session = match store.load() {
            Some((id_user, profile)) => {
                log::info!("restored session for user {id_user}");
                Session::restored(id_user, profile)
            }
            None => Session::default(),
        };
        Self {
            api: Arc::new(api),
            store: Arc::new(store),
            inner: Arc::new(Mutex::new(Inner { session, ..Inner::default() })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn store(&self) -> &PersistedSessionStore<S, C> {
        &self.store
    }

    /// Persisted login flag; survives reloads even before rehydration.
    pub fn is_persisted_login(&self) -> bool {
        self.store.is_login()
    }

    /// Register `listener` to run after every session change.
    pub fn on_change<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = ListenerId(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) {
        self.lock().listeners.retain(|(lid, _)| *lid != id);
    }

    /// Apply `action` and notify listeners if the session changed.
    pub fn dispatch(&self, action: SessionAction) -> bool {
        let (changed, snapshot, listeners) = {
            let mut inner = self.lock();
            let changed = inner.session.apply(action);
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (changed, inner.session.clone(), listeners)
        };
        if changed {
            for listener in listeners {
                listener(&snapshot);
            }
        }
        changed
    }

    pub fn set_active_per_info(&self, info: ActivePerInfo) {
        self.dispatch(SessionAction::SetActivePerInfo(info));
    }

    /// Persist `profile` and log it in. Returns `false` for profiles without
    /// a `UserID`.
    pub fn establish(&self, profile: UserProfile) -> bool {
        if !profile.is_valid() {
            return false;
        }
        self.store.save(&profile);
        self.dispatch(SessionAction::LoggedIn(profile));
        true
    }

    fn begin(&self, op: Operation) -> u64 {
        let mut inner = self.lock();
        inner.next_seq += 1;
        let seq = inner.next_seq;
        inner.latest.insert(op, seq);
        seq
    }

    fn is_latest(&self, op: Operation, seq: u64) -> bool {
        self.lock().latest.get(&op) == Some(&seq)
    }

    /// Run `request` for `op`, discarding the response if a newer request of
    /// the same kind was issued meanwhile.
    async fn tracked<F>(&self, op: Operation, request: F) -> Option<Result<ApiResponse, ApiError>>
    where
        F: Future<Output = Result<ApiResponse, ApiError>>,
    {
        let seq = self.begin(op);
        let result = request.await;
        if self.is_latest(op, seq) {
            Some(result)
        } else {
            log::debug!("discarding stale {op:?} response #{seq}");
            None
        }
    }

    /// Log in with email/password credentials.
    pub async fn login(&self, credentials: &LoginRequest) -> RequestOutcome<UserProfile> {
        let Some(result) = self.tracked(Operation::Login, self.api.login(credentials)).await else {
            return RequestOutcome::Superseded;
        };
        match classify(result) {
            RequestOutcome::Success(profile) => {
                self.establish(profile.clone());
                log::info!("logged in as user {}", profile.user_id().unwrap_or_default());
                RequestOutcome::Success(profile)
            }
            RequestOutcome::DomainError(message) => {
                log::warn!("login rejected: {}", message.as_deref().unwrap_or("no message"));
                let shown = message.clone().unwrap_or_else(|| DEFAULT_SERVER_ERROR.to_owned());
                self.dispatch(SessionAction::Failed(shown));
                RequestOutcome::DomainError(message)
            }
            RequestOutcome::TransportError(e) => {
                log::error!("login request failed: {e}");
                RequestOutcome::TransportError(e)
            }
            RequestOutcome::Superseded => RequestOutcome::Superseded,
        }
    }

    /// Log out remotely; on success clear the persisted mirror and reset.
    pub async fn logout(&self) -> RequestOutcome<()> {
        let Some(result) = self.tracked(Operation::Logout, self.api.logout()).await else {
            return RequestOutcome::Superseded;
        };
        match result {
            Ok(resp) if resp.is_success() => {
                self.store.clear();
                self.dispatch(SessionAction::LoggedOut);
                log::info!("logged out");
                RequestOutcome::Success(())
            }
            Ok(resp) => {
                let message = resp.message().map(str::to_owned);
                log::warn!("logout rejected: {}", message.as_deref().unwrap_or("no message"));
                RequestOutcome::DomainError(message)
            }
            Err(e) => {
                log::error!("logout request failed: {e}");
                RequestOutcome::TransportError(e)
            }
        }
    }

    /// Update profile fields; on success the new profile replaces the old
    /// one and is re-persisted.
    pub async fn edit_profile(&self, changes: &Map<String, Value>) -> RequestOutcome<UserProfile> {
        let Some(result) = self.tracked(Operation::EditProfile, self.api.edit_profile(changes)).await else {
            return RequestOutcome::Superseded;
        };
        let outcome = classify(result);
        match &outcome {
            RequestOutcome::Success(profile) => {
                if self.dispatch(SessionAction::ProfileEdited(profile.clone())) {
                    self.store.save(profile);
                }
            }
            RequestOutcome::DomainError(message) => {
                log::warn!("profile edit rejected: {}", message.as_deref().unwrap_or("no message"));
            }
            RequestOutcome::TransportError(e) => log::error!("profile edit failed: {e}"),
            RequestOutcome::Superseded => {}
        }
        outcome
    }

    /// Fetch the profile behind a social-login session. Read-only: the
    /// session itself is established from the `user_info` cookie.
    pub async fn fetch_social_profile(&self) -> RequestOutcome<UserProfile> {
        let Some(result) = self.tracked(Operation::SocialProfile, self.api.user_profile_social()).await else {
            return RequestOutcome::Superseded;
        };
        let outcome = classify(result);
        match &outcome {
            RequestOutcome::Success(profile) => {
                log::info!("social profile for user {}", profile.user_id().unwrap_or_default());
            }
            RequestOutcome::DomainError(message) => {
                log::warn!("social profile rejected: {}", message.as_deref().unwrap_or("no message"));
            }
            RequestOutcome::TransportError(e) => log::error!("social profile request failed: {e}"),
            RequestOutcome::Superseded => {}
        }
        outcome
    }
}

/// Classify a profile-returning response. A success envelope whose `data` is
/// not a profile with a `UserID` is treated as a domain failure.
fn classify(result: Result<ApiResponse, ApiError>) -> RequestOutcome<UserProfile> {
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => return RequestOutcome::TransportError(e),
    };
    if !resp.is_success() {
        return RequestOutcome::DomainError(resp.message().map(str::to_owned));
    }
    match resp.data.map(UserProfile::try_from) {
        Some(Ok(profile)) if profile.is_valid() => RequestOutcome::Success(profile),
        _ => RequestOutcome::DomainError(resp.message.filter(|m| !m.trim().is_empty())),
    }
}
