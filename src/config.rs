//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so deploy-specific
//! values (API origin, cookie domain, social-login entry points) are baked in
//! at compile time through `option_env!` and fall back to production defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API origin for the Speciapi backend.
pub const DEFAULT_API_BASE_URL: &str = "https://api.speciapi.fun";
/// Domain attribute the server uses when it sets the `user_info` cookie.
pub const DEFAULT_COOKIE_DOMAIN: &str = ".speciapi.fun";
/// Password reset page hosted outside this app.
pub const DEFAULT_RESET_PASSWORD_URL: &str = "https://speciapi.fun/reset-password";

/// Values that differ between deployments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin prefixed to every REST endpoint path.
    pub api_base_url: String,
    /// `Domain` attribute used when expiring the session cookie.
    pub cookie_domain: String,
    /// Server endpoint that starts the Google OAuth redirect.
    pub google_login_url: String,
    /// Server endpoint that starts the Facebook OAuth redirect.
    pub facebook_login_url: String,
    /// External "forgot password" page.
    pub reset_password_url: String,
    /// Minimum level for the console logger.
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            cookie_domain: DEFAULT_COOKIE_DOMAIN.to_owned(),
            google_login_url: format!("{DEFAULT_API_BASE_URL}/auth/google"),
            facebook_login_url: format!("{DEFAULT_API_BASE_URL}/auth/facebook"),
            reset_password_url: DEFAULT_RESET_PASSWORD_URL.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build the config from `SPECIAPI_*` variables captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "SPECIAPI_API_BASE_URL" => option_env!("SPECIAPI_API_BASE_URL"),
            "SPECIAPI_COOKIE_DOMAIN" => option_env!("SPECIAPI_COOKIE_DOMAIN"),
            "SPECIAPI_GOOGLE_LOGIN" => option_env!("SPECIAPI_GOOGLE_LOGIN"),
            "SPECIAPI_FACEBOOK_LOGIN" => option_env!("SPECIAPI_FACEBOOK_LOGIN"),
            "SPECIAPI_RESET_PASSWORD_URL" => option_env!("SPECIAPI_RESET_PASSWORD_URL"),
            "SPECIAPI_LOG_LEVEL" => option_env!("SPECIAPI_LOG_LEVEL"),
            _ => None,
        })
    }

    /// Build the config from an arbitrary key lookup. Blank values are ignored.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        let mut config = Self::default();
        if let Some(base) = get("SPECIAPI_API_BASE_URL") {
            let base = base.trim_end_matches('/').to_owned();
            config.google_login_url = format!("{base}/auth/google");
            config.facebook_login_url = format!("{base}/auth/facebook");
            config.api_base_url = base;
        }
        if let Some(domain) = get("SPECIAPI_COOKIE_DOMAIN") {
            config.cookie_domain = domain;
        }
        if let Some(url) = get("SPECIAPI_GOOGLE_LOGIN") {
            config.google_login_url = url;
        }
        if let Some(url) = get("SPECIAPI_FACEBOOK_LOGIN") {
            config.facebook_login_url = url;
        }
        if let Some(url) = get("SPECIAPI_RESET_PASSWORD_URL") {
            config.reset_password_url = url;
        }
        if let Some(level) = get("SPECIAPI_LOG_LEVEL").and_then(|l| l.parse().ok()) {
            config.log_level = level;
        }
        config
    }
}
