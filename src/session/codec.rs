//! Credential token codec.
//!
//! Tokens are base64-encoded JSON profile objects. The social-login redirect
//! drops one into the `user_info` cookie; decoding it is enough to recover the
//! session without another round trip.
//!
//! ERROR HANDLING
//! ==============
//! `decode_token` never fails loudly: a missing token is logged as a warning,
//! a malformed one as an error, and both are treated as "no session".

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use super::profile::UserProfile;

/// Standard alphabet that, like the browser's `atob`, accepts tokens with or
/// without `=` padding. Cookie parsers and proxies routinely strip it.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid profile json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token payload is not a json object")]
    NotAnObject,
}

/// Decode `token` into a profile, reporting why it failed.
///
/// Surrounding whitespace and double quotes (RFC 6265 quoted cookie values)
/// are stripped before decoding.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is blank, is not base64, or does
/// not contain a JSON object.
pub fn try_decode_token(token: &str) -> Result<UserProfile, TokenError> {
    let token = token.trim().trim_matches('"');
    if token.is_empty() {
        return Err(TokenError::Empty);
    }
    let bytes = FORGIVING.decode(token)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    UserProfile::try_from(value).map_err(|_| TokenError::NotAnObject)
}

/// Decode an optional token, logging and swallowing every failure.
pub fn decode_token(token: Option<&str>) -> Option<UserProfile> {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        log::warn!("no token found");
        return None;
    };
    match try_decode_token(token) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::error!("error decoding token: {e}");
            None
        }
    }
}
