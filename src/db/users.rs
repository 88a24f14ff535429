//! User row lookup and seeding.

use crate::error::DatabaseError;
use crate::{Error, Result};

use super::{Database, UserRow};

impl Database {
    /// Look up a user by username and password
    ///
    /// Parameterized match on both columns, `LIMIT 1`. Returns `None` for an
    /// unknown username and for a wrong password alike; the caller cannot
    /// tell the two apart. Passwords are compared verbatim against the
    /// stored column, which holds plain text.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE username = ? AND password = ?
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to look up user: {}",
                e
            )))
        })?;

        Ok(row)
    }

    /// Insert a user row, returning its ID
    ///
    /// Used for seeding and tests; the unique constraint on `username`
    /// surfaces as a query error.
    pub async fn insert_user(&self, username: &str, password: &str) -> Result<i64> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                Error::Database(DatabaseError::QueryFailed(format!(
                    "Failed to insert user: {}",
                    e
                )))
            })?;

        Ok(result.last_insert_rowid())
    }
}
