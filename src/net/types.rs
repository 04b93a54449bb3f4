//! Wire types for the Speciapi REST contract.
//!
//! DESIGN
//! ======
//! Every endpoint answers with the same `{status, data, message}` envelope.
//! `status == 1` is success; anything else is a domain failure that still
//! arrived intact, which is kept distinct from transport failures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope status signalling success.
pub const STATUS_OK: i64 = 1;

/// Response envelope shared by all endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(deserialize_with = "deserialize_status")]
    pub status: i64,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Server-provided message, if it is non-blank.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

/// Accept numeric and string statuses (`1`, `1.0`, `"1"`). Other values
/// count as failure (`0`). The field itself is required.
fn deserialize_status<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => whole_number(&n).unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Integer value of `n`, treating whole floats (`7.0`) as integers.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
pub fn whole_number(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    let in_range = f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64;
    in_range.then(|| f as i64)
}

/// Body of `POST /user/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub password: String,
}

/// Transport-level failure: the request never produced a readable envelope.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Typed result of one remote operation as seen by the session service.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestOutcome<T> {
    Success(T),
    /// Envelope arrived with `status != 1`; carries the server message.
    DomainError(Option<String>),
    TransportError(ApiError),
    /// A newer request of the same kind was issued before this one finished;
    /// the response was discarded.
    Superseded,
}

impl<T> RequestOutcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
