//! SQL for the `users` table.
//!
//! Fixed statements are plain constants. Search and update depend on which
//! optional fields are present, so they are assembled with a `QueryBuilder`
//! that appends a SQL fragment and its bind value together. Values never end
//! up inside the SQL text.
//!
//! Search binds, in order: `id`, `%name%`, `%email%` (whichever are present).
//! Update binds, in order: `id` (SET), `name`, `email`, `id` (WHERE).

use demo_core::{UserChanges, UserSearch};

use sqlx::{QueryBuilder, Sqlite};

pub const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?, ?)";

pub const SELECT_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = ?";

pub const DELETE_USER: &str = "DELETE FROM users WHERE id = ?";

const SELECT_USERS: &str = "SELECT id, name, email FROM users WHERE 1=1";

/// Build the list/search query. Filters are ANDed onto a match-all base.
pub fn search_users(search: &UserSearch) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(SELECT_USERS);

    if let Some(id) = search.id {
        builder.push(" AND id = ").push_bind(id);
    }
    if let Some(name) = search.name() {
        builder.push(" AND name LIKE ").push_bind(contains_pattern(name));
    }
    if let Some(email) = search.email() {
        builder.push(" AND email LIKE ").push_bind(contains_pattern(email));
    }

    builder
}

/// Build the partial update for one user.
///
/// `id = id` is always written so the SET clause is never empty; with no
/// other changes the statement is a no-op that still runs.
pub fn update_user(id: i64, changes: &UserChanges) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new("UPDATE users SET id = ");
    builder.push_bind(id);

    if let Some(name) = changes.name() {
        builder.push(", name = ").push_bind(name.to_string());
    }
    if let Some(email) = changes.email() {
        builder.push(", email = ").push_bind(email.to_string());
    }

    builder.push(" WHERE id = ").push_bind(id);
    builder
}

fn contains_pattern(value: &str) -> String {
    format!("%{value}%")
}
