//! Audit entry repository.
//!
//! Append-only: entries are inserted once and never updated or deleted.
//! Reads exist for operational inspection and tests; the auditor itself
//! only writes.

use scribe_core::entities::AuditEntry;
use scribe_core::enums::ChangeKind;

use crate::AuditStore;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_detail};

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub item_key: Option<String>,
    pub action: Option<ChangeKind>,
    pub limit: Option<u32>,
}

fn row_to_entry(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get::<String>(0)?,
        item_key: row.get::<String>(1)?,
        modification_time: parse_datetime(&row.get::<String>(4)?)?,
        change: parse_detail(&row.get::<String>(3)?)?,
    })
}

impl AuditStore {
    /// Insert one audit entry, keyed by its `id`.
    ///
    /// The change payload is stored as JSON in the `detail` column; the
    /// `action` column is denormalized from it for filtering.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if serialization or the INSERT fails.
    pub async fn put_entry(&self, entry: &AuditEntry) -> Result<(), DatabaseError> {
        let detail =
            serde_json::to_string(&entry.change).map_err(|e| DatabaseError::Other(e.into()))?;
        self.conn()
            .execute(
                &format!(
                    "INSERT INTO {} (id, item_key, action, detail, modification_time)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    self.table()
                ),
                libsql::params![
                    entry.id.as_str(),
                    entry.item_key.as_str(),
                    entry.change.action().as_str(),
                    detail.as_str(),
                    entry.modification_time.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }

    /// Fetch one audit entry by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no entry has that id.
    pub async fn get_entry(&self, id: &str) -> Result<AuditEntry, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT id, item_key, action, detail, modification_time
                     FROM {} WHERE id = ?1",
                    self.table()
                ),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_entry(&row)
    }

    /// Query audit entries with optional filters, newest first.
    ///
    /// Ordering is stable within equal timestamps (insertion order breaks
    /// the tie), so a batch processed in one call reads back in reverse
    /// delivery order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref key) = filter.item_key {
            params.push(libsql::Value::Text(key.clone()));
            conditions.push(format!("item_key = ?{}", params.len()));
        }
        if let Some(ref action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, item_key, action, detail, modification_time
             FROM {} {where_clause}
             ORDER BY modification_time DESC, rowid DESC LIMIT {limit}",
            self.table()
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }

        Ok(entries)
    }
}
