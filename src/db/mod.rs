//! Database layer for userflow
//!
//! Handles SQLite persistence for the user store backing the login endpoint.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] — Database lifecycle, schema migrations
//! - [`users`] — User row lookup and seeding

use sqlx::FromRow;
use sqlx::sqlite::SqlitePool;

mod migrations;
mod users;

/// User row from the credential store
///
/// The stored password never leaves the database layer; lookups return only
/// the identifier and username.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    /// Unique database ID
    pub id: i64,
    /// Login name, unique across the table
    pub username: String,
}

/// Handle to the user store
///
/// Wraps a connection pool; clones share the pool. Handlers receive this
/// explicitly through router state rather than reaching for process-wide
/// connection state.
#[derive(Debug, Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
}

impl Database {
    /// Access the underlying pool (tests and embedding callers)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
