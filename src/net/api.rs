//! REST API client for the auth/profile endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, sending cookies so the
//! backend session survives the social-login redirect.
//! Elsewhere: every call fails with [`ApiError::Unavailable`], which the
//! session service treats as a transport failure.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx response is a transport failure, whatever its body. A 2xx
//! body must be an envelope with a `status` field; anything else is a
//! decode failure. Only well-formed envelopes reach domain classification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Map, Value};

use super::types::{ApiError, ApiResponse, LoginRequest};

pub const LOGIN_PATH: &str = "/user/login";
pub const LOGOUT_PATH: &str = "/user/logout";
pub const EDIT_PROFILE_PATH: &str = "/user/edit-profile";
pub const PROFILE_SOCIAL_PATH: &str = "/user/profile-social";

/// Remote auth/profile operations consumed by the session service.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse, ApiError>;
    async fn logout(&self) -> Result<ApiResponse, ApiError>;
    async fn edit_profile(&self, changes: &Map<String, Value>) -> Result<ApiResponse, ApiError>;
    /// Profile of the user authenticated through a social-login redirect.
    async fn user_profile_social(&self) -> Result<ApiResponse, ApiError>;
}

/// `gloo-net` implementation rooted at the configured API origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Turn an HTTP status and body into an envelope or a transport error.
///
/// # Errors
///
/// [`ApiError::Status`] for non-2xx responses, [`ApiError::Decode`] when a
/// 2xx body is not an envelope.
pub fn parse_envelope(http_status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    if !(200..300).contains(&http_status) {
        return Err(ApiError::Status(http_status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn read_envelope(resp: gloo_net::http::Response) -> Result<ApiResponse, ApiError> {
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse_envelope(resp.status(), &body)
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<ApiResponse, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(resp).await
}

#[cfg(feature = "csr")]
fn with_credentials(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    builder.credentials(web_sys::RequestCredentials::Include)
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_credentials(gloo_net::http::Request::post(&self.url(LOGIN_PATH)))
                .json(credentials)
                .map_err(|e| ApiError::Request(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_credentials(gloo_net::http::Request::post(&self.url(LOGOUT_PATH)))
                .build()
                .map_err(|e| ApiError::Request(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn edit_profile(&self, changes: &Map<String, Value>) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_credentials(gloo_net::http::Request::put(&self.url(EDIT_PROFILE_PATH)))
                .json(changes)
                .map_err(|e| ApiError::Request(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = changes;
            Err(ApiError::Unavailable)
        }
    }

    async fn user_profile_social(&self) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_credentials(gloo_net::http::Request::get(&self.url(PROFILE_SOCIAL_PATH)))
                .build()
                .map_err(|e| ApiError::Request(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
