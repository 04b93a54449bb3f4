//! Route table and public-route matching.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths are shared by the router in `app`, navigation calls in pages, and
//! the home screen's auth gate. Patterns use `:name` segments and are matched
//! the way the router matches them: whole path, case-insensitive, trailing
//! slash tolerated.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashMap;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PERSONAL_RESULTS: &str = "/personal-results";
pub const GROUP_RESULTS: &str = "/group-results";
pub const CREATE_GROUP: &str = "/create-group";
pub const PERSONALITY_TEST: &str = "/personality-test";
pub const DEPRESSION_TEST: &str = "/depression-test";
pub const GROUP_TEST: &str = "/group-test/:idGroup/test/:questionBankID";

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[GROUP_TEST, LOGIN, REGISTER, HOME];

/// Assessment family selected by the `type` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultKind {
    #[default]
    Disc,
    Beck,
}

impl ResultKind {
    pub const ALL: [Self; 2] = [Self::Disc, Self::Beck];

    /// Numeric code used in `?type=`.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Disc => 1,
            Self::Beck => 2,
        }
    }

    /// Parse a `type` query value; anything other than `2` shows DISC.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("2") => Self::Beck,
            _ => Self::Disc,
        }
    }

    #[must_use]
    pub fn results_label(self) -> &'static str {
        match self {
            Self::Disc => "Kết quả đánh giá DISC",
            Self::Beck => "Kết quả đánh giá BECK",
        }
    }

    /// Route of the test that produces this kind of result.
    #[must_use]
    pub fn test_path(self) -> &'static str {
        match self {
            Self::Disc => PERSONALITY_TEST,
            Self::Beck => DEPRESSION_TEST,
        }
    }
}

/// `/personal-results?type=N`.
#[must_use]
pub fn personal_results(kind: ResultKind) -> String {
    format!("{PERSONAL_RESULTS}?type={}", kind.code())
}

/// Where a freshly authenticated user lands.
#[must_use]
pub fn post_login_target() -> String {
    personal_results(ResultKind::Disc)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

/// Match `path` against `pattern`, returning the captured `:name` params.
#[must_use]
pub fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern: Vec<&str> = segments(pattern).collect();
    let path: Vec<&str> = segments(path).collect();
    if pattern.len() != path.len() {
        return None;
    }
    let mut params = HashMap::new();
    for (expected, actual) in pattern.iter().zip(&path) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_owned(), (*actual).to_owned());
        } else if !expected.eq_ignore_ascii_case(actual) {
            return None;
        }
    }
    Some(params)
}

#[must_use]
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|pattern| match_path(pattern, path).is_some())
}
