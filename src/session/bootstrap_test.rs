use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::net::api::HttpAuthApi;
use crate::session::storage::{CookieJar, KEY_ID_USER, KeyValueStore, MemoryCookies, MemoryStore, PersistedSessionStore};

type TestService = SessionService<HttpAuthApi, Arc<MemoryStore>, Arc<MemoryCookies>>;

fn service_with_cookie(cookie: Option<&str>) -> (TestService, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let cookies = Arc::new(MemoryCookies::new());
    if let Some(cookie) = cookie {
        cookies.write(cookie);
    }
    let store = PersistedSessionStore::new(Arc::clone(&storage), cookies, ".speciapi.fun");
    (SessionService::new(HttpAuthApi::new("http://localhost"), store), storage)
}

#[test]
fn cookie_token_logs_user_in_and_redirects_to_results() {
    // base64 of {"UserID":7}
    let (service, storage) = service_with_cookie(Some("user_info=eyJVc2VySUQiOjd9; Path=/"));

    let outcome = bootstrap(&service);

    assert!(matches!(outcome, BootstrapOutcome::RestoredFromCookie(_)));
    assert_eq!(outcome.redirect().as_deref(), Some("/personal-results?type=1"));
    assert_eq!(service.session().id_user(), "7");
    assert_eq!(storage.get(KEY_ID_USER).as_deref(), Some("7"));
}

#[test]
fn quoted_cookie_token_is_accepted() {
    let (service, _) = service_with_cookie(Some("user_info=\"eyJVc2VySUQiOjd9\""));
    assert!(matches!(bootstrap(&service), BootstrapOutcome::RestoredFromCookie(_)));
    assert_eq!(service.session().id_user(), "7");
}

#[test]
fn existing_session_short_circuits() {
    let (service, _) = service_with_cookie(Some("user_info=eyJVc2VySUQiOjh9"));
    service.establish(UserProfile::try_from(json!({ "UserID": 7 })).unwrap());

    let outcome = bootstrap(&service);

    assert_eq!(outcome, BootstrapOutcome::AlreadyLoggedIn);
    assert_eq!(outcome.redirect().as_deref(), Some("/personal-results?type=1"));
    assert_eq!(service.session().id_user(), "7");
}

#[test]
fn missing_cookie_stays_anonymous() {
    let (service, storage) = service_with_cookie(None);
    let outcome = bootstrap(&service);
    assert_eq!(outcome, BootstrapOutcome::Anonymous);
    assert_eq!(outcome.redirect(), None);
    assert!(storage.is_empty());
}

#[test]
fn malformed_cookie_stays_anonymous_without_storage_writes() {
    // base64 of `{"UserID":`
    let (service, storage) = service_with_cookie(Some("user_info=eyJVc2VySUQiOg=="));
    assert_eq!(bootstrap(&service), BootstrapOutcome::Anonymous);
    assert!(!service.session().is_logged_in());
    assert!(storage.is_empty());
}

#[test]
fn cookie_profile_without_user_id_stays_anonymous() {
    // base64 of {"Email":"a@b.com"}
    let (service, storage) = service_with_cookie(Some("user_info=eyJFbWFpbCI6ImFAYi5jb20ifQ=="));
    assert_eq!(bootstrap(&service), BootstrapOutcome::Anonymous);
    assert!(storage.is_empty());
}
