use super::*;

#[test]
fn valid_form_has_no_errors() {
    assert!(validate_login("an@speciapi.fun", "secret1").is_empty());
}

#[test]
fn empty_password_reports_required_message() {
    let errors = validate_login("an@speciapi.fun", "");
    assert_eq!(errors.get(&Field::Password).map(String::as_str), Some("Vui lòng nhập mật khẩu"));
    assert!(!errors.contains_key(&Field::Email));
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let errors = validate_login("   ", "   ");
    assert_eq!(errors.get(&Field::Email).map(String::as_str), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(&Field::Password).map(String::as_str), Some(PASSWORD_REQUIRED));
}

#[test]
fn malformed_email_is_rejected() {
    for bad in ["an", "an@", "@speciapi.fun", "an@speciapi", "an@@speciapi.fun", "a n@speciapi.fun", "an@speciapi."] {
        assert_eq!(check_email(bad), Some(EMAIL_INVALID), "{bad}");
    }
}

#[test]
fn email_is_trimmed_before_checking() {
    assert_eq!(check_email("  an@speciapi.fun  "), None);
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(check_password("abc12"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(check_password("abc123"), None);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert_eq!(check_password("mậtkh"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(check_password("mậtkhẩu"), None);
}

#[test]
fn password_with_spaces_is_rejected() {
    assert_eq!(check_password("abc 1234"), Some(PASSWORD_HAS_SPACES));
}

#[test]
fn both_fields_report_independently() {
    let errors = validate_login("an@", "123");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(&Field::Email).map(String::as_str), Some(EMAIL_INVALID));
    assert_eq!(errors.get(&Field::Password).map(String::as_str), Some(PASSWORD_TOO_SHORT));
}
