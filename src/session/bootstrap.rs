//! Session recovery when the login screen mounts.
//!
//! The social-login flow ends with the backend redirecting back to `/login`
//! and depositing a token in the `user_info` cookie instead of returning it
//! from a request. Recovering it here turns that redirect into a normal
//! login.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use super::codec::decode_token;
use super::profile::UserProfile;
use super::service::SessionService;
use super::storage::{CookieJar, KeyValueStore, SESSION_COOKIE};
use crate::net::api::AuthApi;
use crate::routes;

#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapOutcome {
    /// A session was already live; nothing was touched.
    AlreadyLoggedIn,
    /// The cookie token decoded to a valid profile and was logged in.
    RestoredFromCookie(UserProfile),
    /// No usable session; stay on the login screen.
    Anonymous,
}

impl BootstrapOutcome {
    /// Navigation target, if the user should leave the login screen.
    #[must_use]
    pub fn redirect(&self) -> Option<String> {
        match self {
            Self::AlreadyLoggedIn | Self::RestoredFromCookie(_) => Some(routes::post_login_target()),
            Self::Anonymous => None,
        }
    }
}

/// Decide whether the visitor is already authenticated, recovering a session
/// from the `user_info` cookie when possible.
pub fn bootstrap<A, S, C>(service: &SessionService<A, S, C>) -> BootstrapOutcome
where
    A: AuthApi,
    S: KeyValueStore,
    C: CookieJar,
{
    if service.session().is_logged_in() {
        return BootstrapOutcome::AlreadyLoggedIn;
    }
    let Some(token) = service.store().read_cookie(SESSION_COOKIE) else {
        return BootstrapOutcome::Anonymous;
    };
    match decode_token(Some(&token)) {
        Some(profile) if service.establish(profile.clone()) => {
            log::info!("session recovered from {SESSION_COOKIE} cookie");
            BootstrapOutcome::RestoredFromCookie(profile)
        }
        Some(_) => {
            log::warn!("{SESSION_COOKIE} cookie carries no UserID");
            BootstrapOutcome::Anonymous
        }
        None => BootstrapOutcome::Anonymous,
    }
}
