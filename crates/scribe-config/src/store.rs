//! Audit store configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default database path, relative to the working directory.
fn default_path() -> String {
    ".scribe/audit.db".to_string()
}

/// Default destination table for audit entries.
fn default_table() -> String {
    "audit_trail".to_string()
}

/// Destination of audit writes: which database file and which table.
///
/// Resolved once at process start and passed explicitly into the auditor —
/// tests point `path` at `:memory:` or a temp file without touching the
/// process environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL database file. `:memory:` for an ephemeral store.
    #[serde(default = "default_path")]
    pub path: String,

    /// Table that audit entries are written to.
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            table: default_table(),
        }
    }
}

impl StoreConfig {
    /// Whether the store is an in-memory database.
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Validate the table name as a SQL identifier.
    ///
    /// The table name is interpolated into DDL and queries, so it must be
    /// `[A-Za-z_][A-Za-z0-9_]*` — anything else is rejected before a
    /// connection is ever opened.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the name is empty or contains
    /// characters outside the identifier set.
    pub fn validate_table(&self) -> Result<(), ConfigError> {
        let mut chars = self.table.chars();
        let valid = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "store.table".to_string(),
                reason: format!("'{}' is not a valid SQL identifier", self.table),
            })
        }
    }
}
