//! User entity - the single row type of the `users` table.

/// A stored user.
///
/// `id` is assigned by the database on insert and never changes afterwards.
/// `name` and `email` are nullable columns: a create request that omits a
/// field stores `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
