//! User repository for CRUD operations on the `users` table.
//!
//! Every method runs exactly one statement directly on the pool. The pool
//! checks a connection out for that statement and takes it back when the
//! call finishes, whether it succeeded or not.

use crate::Result as DbErrorResult;
use crate::queries::user_queries::{
    DELETE_USER, INSERT_USER, SELECT_USER_BY_ID, search_users, update_user,
};

use demo_core::{NewUser, User, UserChanges, UserSearch};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the id the database assigned to it.
    pub async fn create(&self, user: &NewUser) -> DbErrorResult<i64> {
        let result = sqlx::query(INSERT_USER)
            .bind(user.name.as_deref())
            .bind(user.email.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(SELECT_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    /// Rows matching every present filter, in the store's natural order.
    pub async fn search(&self, search: &UserSearch) -> DbErrorResult<Vec<User>> {
        let mut builder = search_users(search);
        let rows = builder.build().fetch_all(&self.pool).await?;

        rows.iter().map(user_from_row).collect()
    }

    /// Apply a partial update. Returns the number of rows matched.
    pub async fn update(&self, id: i64, changes: &UserChanges) -> DbErrorResult<u64> {
        let mut builder = update_user(id, changes);
        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Delete a user. Deleting a missing id is not an error and returns 0.
    pub async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}
