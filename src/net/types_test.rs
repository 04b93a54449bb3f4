use super::*;
use serde_json::json;

#[test]
fn api_response_success_envelope() {
    let resp: ApiResponse = serde_json::from_value(json!({
        "status": 1,
        "data": { "UserID": 7 },
        "message": "ok"
    }))
    .unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data, Some(json!({ "UserID": 7 })));
}

#[test]
fn api_response_string_status_is_accepted() {
    let resp: ApiResponse = serde_json::from_value(json!({ "status": "1" })).unwrap();
    assert!(resp.is_success());
}

#[test]
fn api_response_without_status_is_rejected() {
    assert!(serde_json::from_value::<ApiResponse>(json!({ "data": null })).is_err());
    assert!(serde_json::from_value::<ApiResponse>(json!({ "detail": "Bad Gateway" })).is_err());
}

#[test]
fn api_response_whole_float_status_is_success() {
    let resp: ApiResponse = serde_json::from_value(json!({ "status": 1.0 })).unwrap();
    assert!(resp.is_success());
    let half: ApiResponse = serde_json::from_value(json!({ "status": 1.5 })).unwrap();
    assert!(!half.is_success());
}

#[test]
fn api_response_odd_status_is_failure() {
    let odd: ApiResponse = serde_json::from_value(json!({ "status": [1] })).unwrap();
    assert!(!odd.is_success());
    let zero: ApiResponse = serde_json::from_value(json!({ "status": 0, "message": "Sai mật khẩu" })).unwrap();
    assert!(!zero.is_success());
    assert_eq!(zero.message(), Some("Sai mật khẩu"));
}

#[test]
fn api_response_blank_message_is_none() {
    let resp = ApiResponse { status: 0, data: None, message: Some("   ".to_owned()) };
    assert_eq!(resp.message(), None);
}

#[test]
fn login_request_uses_camel_case_user_name() {
    let body = LoginRequest { user_name: "a@b.com".to_owned(), password: "secret1".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "userName": "a@b.com", "password": "secret1" })
    );
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected http status 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

#[test]
fn request_outcome_success_check() {
    assert!(RequestOutcome::Success(()).is_success());
    assert!(!RequestOutcome::<()>::DomainError(None).is_success());
    assert!(!RequestOutcome::<()>::Superseded.is_success());
}

#[test]
fn whole_number_accepts_integral_floats_only() {
    let float = |f: f64| serde_json::Number::from_f64(f).unwrap();
    assert_eq!(whole_number(&serde_json::Number::from(7)), Some(7));
    assert_eq!(whole_number(&float(7.0)), Some(7));
    assert_eq!(whole_number(&float(7.25)), None);
}
