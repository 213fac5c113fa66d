//! # scribe-db
//!
//! libSQL audit store operations for Scribe.
//!
//! The audit store is a single table of append-only audit entries in an
//! embedded libSQL database. Uses the `libsql` crate (C `SQLite` fork,
//! v0.9.29) — stable API and `:memory:` databases for tests.

pub mod audit;
pub mod error;
pub mod helpers;
mod migrations;

use error::DatabaseError;
use libsql::Builder;
use scribe_config::StoreConfig;

/// Handle to the audit store.
///
/// Wraps a libSQL database and connection. Opening runs migrations;
/// dropping the handle releases the connection, so a store opened at the
/// start of a batch is released on every exit path.
#[derive(Debug)]
pub struct AuditStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    table: String,
}

impl AuditStore {
    /// Open the audit store described by `config`.
    ///
    /// Validates the configured table name, opens the database file
    /// (`:memory:` for an ephemeral store), and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the table name is invalid, the database
    /// cannot be opened, or migrations fail.
    pub async fn open(config: &StoreConfig) -> Result<Self, DatabaseError> {
        config
            .validate_table()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;

        let store = Self {
            db,
            conn,
            table: config.table.clone(),
        };
        store.run_migrations().await?;
        tracing::debug!("Opened audit store {} (table {})", config.path, store.table);
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// The table audit entries are written to.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Generate a prefixed ID via libSQL. Returns e.g.,
    /// `"aud-9f2c4b7e1a0d8356c2e4f6a8b0d19e37"`.
    ///
    /// Uses `randomblob(16)` in SQL to produce 32-char hex, then prepends
    /// the prefix. 128 random bits keep redelivered duplicates from ever
    /// colliding with the entries they duplicate.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(16)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
