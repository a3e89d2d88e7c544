use crate::{CreateUserRequest, UpdateUserRequest};

use demo_core::{NewUser, UserChanges};

#[test]
fn test_create_request_missing_fields_become_none() {
    let req: CreateUserRequest = serde_json::from_str(r#"{"name": "Kim"}"#).unwrap();

    let user = NewUser::from(req);

    assert_eq!(user.name.as_deref(), Some("Kim"));
    assert_eq!(user.email, None);
}

#[test]
fn test_create_request_keeps_empty_strings() {
    let req: CreateUserRequest = serde_json::from_str(r#"{"name": "", "email": ""}"#).unwrap();

    let user = NewUser::from(req);

    assert_eq!(user.name.as_deref(), Some(""));
    assert_eq!(user.email.as_deref(), Some(""));
}

#[test]
fn test_create_request_ignores_id() {
    let req: CreateUserRequest =
        serde_json::from_str(r#"{"id": 7, "name": "Kim", "email": "kim@test.com"}"#).unwrap();

    assert_eq!(NewUser::from(req), NewUser::new("Kim", "kim@test.com"));
}

#[test]
fn test_update_request_with_empty_name_changes_only_email() {
    let req: UpdateUserRequest =
        serde_json::from_str(r#"{"name": "", "email": "lee@test.com"}"#).unwrap();

    let changes = UserChanges::from(req);

    assert_eq!(changes.name(), None);
    assert_eq!(changes.email(), Some("lee@test.com"));
}

#[test]
fn test_empty_update_request_is_empty() {
    let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();

    assert!(UserChanges::from(req).is_empty());
}
