pub mod error;
pub mod queries;
pub mod repositories;

#[cfg(test)]
mod tests;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

/// Reference DDL for the `users` table, shared by the test suites.
pub const USERS_SCHEMA: &str = include_str!("../schema/users.sql");
