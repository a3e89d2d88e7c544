use crate::UserChanges;

#[test]
fn test_user_changes_skips_empty_values() {
    let changes = UserChanges {
        name: Some(String::new()),
        email: Some("lee@test.com".into()),
    };

    assert_eq!(changes.name(), None);
    assert_eq!(changes.email(), Some("lee@test.com"));
    assert!(!changes.is_empty());
}

#[test]
fn test_user_changes_default_is_empty() {
    assert!(UserChanges::default().is_empty());
}

#[test]
fn test_user_changes_with_only_empty_strings_is_empty() {
    let changes = UserChanges {
        name: Some(String::new()),
        email: Some(String::new()),
    };

    assert!(changes.is_empty());
}
