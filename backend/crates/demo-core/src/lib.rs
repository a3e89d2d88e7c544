pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_changes::UserChanges;
pub use models::user_search::UserSearch;

/// Treat an empty string the same as an absent value.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
