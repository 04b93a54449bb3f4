//! In-memory auth session and its transitions.
//!
//! DESIGN
//! ======
//! `Session` is a plain value; every mutation goes through [`Session::apply`]
//! so the `id_user`/`user_profile` pairing can only change together. Side
//! effects (persistence, navigation) belong to the service and views.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use super::profile::UserProfile;

/// Personal-info slide panel toggle shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePerInfo {
    pub is_open: bool,
    pub init_slide_per_info: i32,
}

impl Default for ActivePerInfo {
    fn default() -> Self {
        Self { is_open: false, init_slide_per_info: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn,
}

/// The current user's session as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    id_user: String,
    user_profile: UserProfile,
    error: String,
    active_per_info: ActivePerInfo,
}

/// Named state transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// Login response succeeded or a cookie token decoded to a valid profile.
    LoggedIn(UserProfile),
    /// Profile edit succeeded.
    ProfileEdited(UserProfile),
    /// Logout succeeded.
    LoggedOut,
    /// A request failed at the domain level; the message is kept for display.
    Failed(String),
    /// Replace the personal-info panel state.
    SetActivePerInfo(ActivePerInfo),
}

impl Session {
    /// Logged-in session restored from durable storage.
    #[must_use]
    pub fn restored(id_user: String, user_profile: UserProfile) -> Self {
        Self { id_user, user_profile, ..Self::default() }
    }

    #[must_use]
    pub fn id_user(&self) -> &str {
        &self.id_user
    }

    #[must_use]
    pub fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn active_per_info(&self) -> ActivePerInfo {
        self.active_per_info
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.id_user.is_empty() { SessionPhase::LoggedOut } else { SessionPhase::LoggedIn }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.phase() == SessionPhase::LoggedIn
    }

    /// Apply `action`, returning whether anything changed.
    ///
    /// Profiles without a `UserID` never log a user in, and a profile edit
    /// while logged out is ignored.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        let before = self.clone();
        match action {
            SessionAction::LoggedIn(profile) => {
                if let Some(id_user) = profile.user_id() {
                    self.id_user = id_user;
                    self.user_profile = profile;
                    self.error.clear();
                }
            }
            SessionAction::ProfileEdited(profile) => {
                if self.is_logged_in() && profile.user_id().as_deref() == Some(self.id_user.as_str()) {
                    self.user_profile = profile;
                }
            }
            SessionAction::LoggedOut => *self = Self::default(),
            SessionAction::Failed(message) => self.error = message,
            SessionAction::SetActivePerInfo(info) => self.active_per_info = info,
        }
        *self != before
    }
}
