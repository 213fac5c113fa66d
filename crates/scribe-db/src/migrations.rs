//! Audit table migration runner.
//!
//! Executed on store open. All statements use `IF NOT EXISTS` so re-running
//! against an existing database is a no-op. The SQL is built per-store
//! because the destination table name is configuration; the name is
//! validated as a bare identifier before it reaches this module.

use crate::AuditStore;
use crate::error::DatabaseError;

impl AuditStore {
    /// Create the audit table and its indexes.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let table = &self.table;
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                item_key TEXT NOT NULL,
                action TEXT NOT NULL,
                detail TEXT NOT NULL,
                modification_time TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_{table}_item_key
                ON {table} (item_key);
            CREATE INDEX IF NOT EXISTS idx_{table}_modification_time
                ON {table} (modification_time);"
        );
        self.conn()
            .execute_batch(&sql)
            .await
            .map_err(|e| DatabaseError::Migration(format!("{table}: {e}")))?;
        Ok(())
    }
}
