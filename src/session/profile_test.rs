use super::*;
use serde_json::json;

fn profile(value: Value) -> UserProfile {
    UserProfile::try_from(value).unwrap()
}

#[test]
fn user_id_reads_numeric_id_as_decimal_string() {
    assert_eq!(profile(json!({ "UserID": 7 })).user_id(), Some("7".to_owned()));
}

#[test]
fn user_id_renders_whole_float_without_fraction() {
    assert_eq!(profile(json!({ "UserID": 7.0 })).user_id(), Some("7".to_owned()));
    assert_eq!(profile(json!({ "UserID": 7.5 })).user_id(), Some("7.5".to_owned()));
}

#[test]
fn user_id_reads_string_id() {
    assert_eq!(profile(json!({ "UserID": "u-42" })).user_id(), Some("u-42".to_owned()));
}

#[test]
fn user_id_missing_or_blank_is_none() {
    assert_eq!(profile(json!({ "Email": "a@b.com" })).user_id(), None);
    assert_eq!(profile(json!({ "UserID": "" })).user_id(), None);
    assert_eq!(profile(json!({ "UserID": null })).user_id(), None);
    assert!(!profile(json!({ "UserID": true })).is_valid());
}

#[test]
fn default_profile_is_empty_and_invalid() {
    let p = UserProfile::default();
    assert!(p.is_empty());
    assert!(!p.is_valid());
}

#[test]
fn try_from_rejects_non_objects() {
    assert!(UserProfile::try_from(json!([1, 2])).is_err());
    assert!(UserProfile::try_from(json!("UserID")).is_err());
}

#[test]
fn serializes_transparently_as_object() {
    let p = profile(json!({ "UserID": 7, "FullName": "An" }));
    let raw = serde_json::to_value(&p).unwrap();
    assert_eq!(raw, json!({ "UserID": 7, "FullName": "An" }));
    assert_eq!(p.get_str("FullName"), Some("An"));
}
