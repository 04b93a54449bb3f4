//! User profile record shared by the codec, the store and the API layer.
//!
//! DESIGN
//! ======
//! The backend owns the profile schema and adds fields freely, so the record
//! is kept as an open JSON object. Only `UserID` is interpreted client-side.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::net::types::whole_number;

/// Key carrying the unique user identifier.
pub const USER_ID_FIELD: &str = "UserID";

/// Opaque user profile as issued by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    /// `UserID` normalized to a string. Numeric ids are rendered in decimal,
    /// whole floats without a fraction (`7.0` is `"7"`); empty strings and
    /// other JSON types count as missing.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        match self.0.get(USER_ID_FIELD)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(whole_number(n).map_or_else(|| n.to_string(), |i| i.to_string())),
            _ => None,
        }
    }

    /// A profile is usable for a session only when it carries a `UserID`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.user_id().is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String field lookup used for display (name, email, avatar).
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Value> for UserProfile {
    type Error = Value;

    /// Accepts JSON objects only; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
