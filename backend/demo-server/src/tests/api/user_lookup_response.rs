use crate::{UserDto, UserLookupResponse};

use serde_json::json;

#[test]
fn test_found_user_serializes_as_object() {
    let dto = UserDto {
        id: 1,
        name: Some("Kim".into()),
        email: Some("kim@test.com".into()),
    };

    let value = serde_json::to_value(UserLookupResponse::from(Some(dto))).unwrap();

    assert_eq!(
        value,
        json!({"id": 1, "name": "Kim", "email": "kim@test.com"})
    );
}

#[test]
fn test_missing_user_serializes_as_empty_object() {
    let value = serde_json::to_value(UserLookupResponse::from(None)).unwrap();

    assert_eq!(value, json!({}));
}

#[test]
fn test_null_columns_serialize_as_null() {
    let dto = UserDto {
        id: 2,
        name: None,
        email: None,
    };

    let value = serde_json::to_value(UserLookupResponse::Found(dto)).unwrap();

    assert_eq!(value, json!({"id": 2, "name": null, "email": null}));
}
