use super::*;

#[test]
fn default_points_at_production_backend() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "https://api.speciapi.fun");
    assert_eq!(config.cookie_domain, ".speciapi.fun");
    assert_eq!(config.google_login_url, "https://api.speciapi.fun/auth/google");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn from_lookup_without_values_matches_default() {
    assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
}

#[test]
fn from_lookup_base_url_derives_social_endpoints() {
    let config = AppConfig::from_lookup(|key| match key {
        "SPECIAPI_API_BASE_URL" => Some("http://localhost:8080/"),
        _ => None,
    });
    assert_eq!(config.api_base_url, "http://localhost:8080");
    assert_eq!(config.facebook_login_url, "http://localhost:8080/auth/facebook");
}

#[test]
fn from_lookup_explicit_social_url_wins_over_derived() {
    let config = AppConfig::from_lookup(|key| match key {
        "SPECIAPI_API_BASE_URL" => Some("http://localhost:8080"),
        "SPECIAPI_GOOGLE_LOGIN" => Some("https://accounts.example/google"),
        _ => None,
    });
    assert_eq!(config.google_login_url, "https://accounts.example/google");
    assert_eq!(config.facebook_login_url, "http://localhost:8080/auth/facebook");
}

#[test]
fn from_lookup_ignores_blank_and_invalid_values() {
    let config = AppConfig::from_lookup(|key| match key {
        "SPECIAPI_COOKIE_DOMAIN" => Some("   "),
        "SPECIAPI_LOG_LEVEL" => Some("loud"),
        _ => None,
    });
    assert_eq!(config.cookie_domain, ".speciapi.fun");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn from_lookup_parses_log_level() {
    let config = AppConfig::from_lookup(|key| (key == "SPECIAPI_LOG_LEVEL").then_some("debug"));
    assert_eq!(config.log_level, log::Level::Debug);
}
