//! Login form validation.
//!
//! Rules run client-side before any request is issued; each failing field
//! gets one message, and a non-empty error map blocks submission.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

pub const EMAIL_REQUIRED: &str = "Vui lòng nhập Email";
pub const EMAIL_INVALID: &str = "Email không hợp lệ";
pub const PASSWORD_REQUIRED: &str = "Vui lòng nhập mật khẩu";
pub const PASSWORD_TOO_SHORT: &str = "Mật khẩu phải có ít nhất 6 ký tự";
pub const PASSWORD_HAS_SPACES: &str = "Mật khẩu không được chứa khoảng trắng";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Keys of the per-field error map. `Server` holds request failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    Server,
}

pub type FieldErrors = BTreeMap<Field, String>;

/// Format problem with `value`, or `None` if it looks like an address.
///
/// Requires exactly one `@`, a non-empty local part, a dotted domain, and no
/// whitespace.
#[must_use]
pub fn check_email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return Some(EMAIL_INVALID);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Some(EMAIL_INVALID);
    };
    let domain_ok = !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty());
    if local.is_empty() || !domain_ok {
        return Some(EMAIL_INVALID);
    }
    None
}

/// Format problem with `value`, or `None` if the password is acceptable.
#[must_use]
pub fn check_password(value: &str) -> Option<&'static str> {
    if value.chars().any(char::is_whitespace) {
        return Some(PASSWORD_HAS_SPACES);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Some(PASSWORD_TOO_SHORT);
    }
    None
}

/// Validate the login form, returning one message per failing field.
#[must_use]
pub fn validate_login(user_name: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if user_name.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED.to_owned());
    } else if let Some(message) = check_email(user_name) {
        errors.insert(Field::Email, message.to_owned());
    }

    if password.trim().is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED.to_owned());
    } else if let Some(message) = check_password(password) {
        errors.insert(Field::Password, message.to_owned());
    }

    errors
}
