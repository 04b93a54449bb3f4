use super::*;
use crate::net::types::ApiError;

#[test]
fn prepare_login_with_empty_password_blocks_request() {
    let errors = prepare_login("an@speciapi.fun", "").unwrap_err();
    assert_eq!(errors.get(&Field::Password).map(String::as_str), Some("Vui lòng nhập mật khẩu"));
}

#[test]
fn prepare_login_trims_user_name_only() {
    let request = prepare_login("  an@speciapi.fun ", "secret1").unwrap();
    assert_eq!(request.user_name, "an@speciapi.fun");
    assert_eq!(request.password, "secret1");
}

#[test]
fn clear_field_error_removes_only_that_field() {
    let mut errors = prepare_login("", "").unwrap_err();
    errors.insert(Field::Server, SERVER_UNREACHABLE.to_owned());

    assert!(clear_field_error(&mut errors, Field::Email));
    assert!(!errors.contains_key(&Field::Email));
    assert!(errors.contains_key(&Field::Password));
    assert!(errors.contains_key(&Field::Server));
}

#[test]
fn clear_field_error_on_clean_field_reports_no_change() {
    let mut errors = FieldErrors::new();
    assert!(!clear_field_error(&mut errors, Field::Password));
    assert!(errors.is_empty());
}

#[test]
fn redirect_once_keeps_checking_until_a_target_appears() {
    let mut gate = RedirectOnce::default();
    assert_eq!(gate.next(|| None), None);
    assert_eq!(gate.next(|| Some("/personal-results?type=1".to_owned())).as_deref(), Some("/personal-results?type=1"));
}

#[test]
fn redirect_once_skips_the_check_after_redirecting() {
    let mut gate = RedirectOnce::default();
    gate.next(|| Some("/personal-results?type=1".to_owned()));

    let mut checked = false;
    let again = gate.next(|| {
        checked = true;
        Some("/personal-results?type=1".to_owned())
    });

    assert_eq!(again, None);
    assert!(!checked);
}

#[test]
fn server_error_message_prefers_server_text() {
    let outcome = RequestOutcome::<()>::DomainError(Some("Tài khoản bị khóa".to_owned()));
    assert_eq!(server_error_message(&outcome).as_deref(), Some("Tài khoản bị khóa"));
}

#[test]
fn server_error_message_falls_back_to_default() {
    let outcome = RequestOutcome::<()>::DomainError(None);
    assert_eq!(server_error_message(&outcome).as_deref(), Some("Đã xảy ra lỗi, vui lòng thử lại sau!"));
}

#[test]
fn server_error_message_for_transport_failure() {
    let outcome = RequestOutcome::<()>::TransportError(ApiError::Network("offline".to_owned()));
    assert_eq!(server_error_message(&outcome).as_deref(), Some(SERVER_UNREACHABLE));
}

#[test]
fn server_error_message_none_for_success_and_stale() {
    assert_eq!(server_error_message(&RequestOutcome::Success(())), None);
    assert_eq!(server_error_message(&RequestOutcome::<()>::Superseded), None);
}
