use super::*;

// =============================================================
// match_path
// =============================================================

#[test]
fn match_path_exact_static_route() {
    assert!(match_path("/login", "/login").is_some());
    assert!(match_path("/login", "/register").is_none());
}

#[test]
fn match_path_tolerates_trailing_slash_and_case() {
    assert!(match_path("/login", "/login/").is_some());
    assert!(match_path("/login", "/LOGIN").is_some());
}

#[test]
fn match_path_root_only_matches_root() {
    assert!(match_path("/", "/").is_some());
    assert!(match_path("/", "").is_some());
    assert!(match_path("/", "/personal-results").is_none());
}

#[test]
fn match_path_captures_params() {
    let params = match_path(GROUP_TEST, "/group-test/12/test/34").unwrap();
    assert_eq!(params.get("idGroup").map(String::as_str), Some("12"));
    assert_eq!(params.get("questionBankID").map(String::as_str), Some("34"));
}

#[test]
fn match_path_param_requires_a_segment() {
    assert!(match_path(GROUP_TEST, "/group-test/12/test").is_none());
    assert!(match_path(GROUP_TEST, "/group-test/12/test/34/extra").is_none());
}

#[test]
fn match_path_ignores_query_and_hash() {
    assert!(match_path(PERSONAL_RESULTS, "/personal-results?type=1").is_some());
    assert!(match_path(LOGIN, "/login#top").is_some());
}

// =============================================================
// is_public_route
// =============================================================

#[test]
fn public_routes_are_recognized() {
    assert!(is_public_route("/"));
    assert!(is_public_route("/login"));
    assert!(is_public_route("/register"));
    assert!(is_public_route("/group-test/5/test/9"));
}

#[test]
fn private_routes_are_not_public() {
    assert!(!is_public_route("/personal-results"));
    assert!(!is_public_route("/group-results"));
    assert!(!is_public_route("/create-group"));
    assert!(!is_public_route("/group-test/5"));
}

// =============================================================
// ResultKind
// =============================================================

#[test]
fn result_kind_from_query() {
    assert_eq!(ResultKind::from_query(Some("1")), ResultKind::Disc);
    assert_eq!(ResultKind::from_query(Some("2")), ResultKind::Beck);
    assert_eq!(ResultKind::from_query(Some("abc")), ResultKind::Disc);
    assert_eq!(ResultKind::from_query(None), ResultKind::Disc);
}

#[test]
fn personal_results_formats_type_query() {
    assert_eq!(personal_results(ResultKind::Disc), "/personal-results?type=1");
    assert_eq!(personal_results(ResultKind::Beck), "/personal-results?type=2");
    assert_eq!(post_login_target(), "/personal-results?type=1");
}

#[test]
fn result_kind_test_paths() {
    assert_eq!(ResultKind::Disc.test_path(), PERSONALITY_TEST);
    assert_eq!(ResultKind::Beck.test_path(), DEPRESSION_TEST);
}
