use crate::queries::user_queries::{search_users, update_user};

use demo_core::{UserChanges, UserSearch};

#[test]
fn test_search_without_filters_matches_all_rows() {
    let builder = search_users(&UserSearch::default());

    assert_eq!(builder.sql(), "SELECT id, name, email FROM users WHERE 1=1");
}

#[test]
fn test_search_appends_filters_in_id_name_email_order() {
    let search = UserSearch {
        id: Some(7),
        name: Some("Kim".into()),
        email: Some("test.com".into()),
    };

    let builder = search_users(&search);

    assert_eq!(
        builder.sql(),
        "SELECT id, name, email FROM users WHERE 1=1 AND id = ? AND name LIKE ? AND email LIKE ?"
    );
}

#[test]
fn test_search_skips_empty_name() {
    let search = UserSearch {
        id: None,
        name: Some(String::new()),
        email: Some("kim".into()),
    };

    let builder = search_users(&search);

    assert_eq!(
        builder.sql(),
        "SELECT id, name, email FROM users WHERE 1=1 AND email LIKE ?"
    );
}

#[test]
fn test_update_without_changes_still_assigns_id() {
    let builder = update_user(3, &UserChanges::default());

    assert_eq!(builder.sql(), "UPDATE users SET id = ? WHERE id = ?");
}

#[test]
fn test_update_with_both_fields() {
    let changes = UserChanges {
        name: Some("Lee".into()),
        email: Some("lee@test.com".into()),
    };

    let builder = update_user(3, &changes);

    assert_eq!(
        builder.sql(),
        "UPDATE users SET id = ?, name = ?, email = ? WHERE id = ?"
    );
}

#[test]
fn test_update_skips_empty_name() {
    let changes = UserChanges {
        name: Some(String::new()),
        email: Some("lee@test.com".into()),
    };

    let builder = update_user(3, &changes);

    assert_eq!(builder.sql(), "UPDATE users SET id = ?, email = ? WHERE id = ?");
}
