use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ChangeKind;

use super::ItemSnapshot;

/// The change payload carried by an audit entry.
///
/// Untagged: the two shapes are distinguishable by structure, so the
/// serialized entry carries its change fields directly rather than a
/// wrapper object. A created entry has a `new_value` snapshot and nothing
/// else; an updated entry has numeric `old_value`/`new_value` plus the
/// name of the attribute that changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditChange {
    Created {
        new_value: ItemSnapshot,
    },
    Updated {
        old_value: f64,
        new_value: f64,
        updated_attribute: String,
    },
}

impl AuditChange {
    /// The change kind this payload records, as stored in the `action` column.
    #[must_use]
    pub const fn action(&self) -> ChangeKind {
        match self {
            Self::Created { .. } => ChangeKind::Created,
            Self::Updated { .. } => ChangeKind::Updated,
        }
    }
}

/// An append-only audit trail entry recording one mutation to a tracked item.
///
/// Created once per qualifying change record, persisted immediately, never
/// mutated or deleted. `id` is freshly generated per entry, so a redelivered
/// change produces a second entry rather than overwriting the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub item_key: String,
    /// Capture time: when the auditor processed the record, not when the
    /// mutation happened at the source.
    pub modification_time: DateTime<Utc>,
    #[serde(flatten)]
    pub change: AuditChange,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn created_entry() -> AuditEntry {
        AuditEntry {
            id: "aud-00000000000000000000000000000001".to_string(),
            item_key: "cfg-1".to_string(),
            modification_time: "2026-08-06T12:00:00Z".parse().unwrap(),
            change: AuditChange::Created {
                new_value: ItemSnapshot {
                    key: "cfg-1".to_string(),
                    value: 42.0,
                },
            },
        }
    }

    fn updated_entry() -> AuditEntry {
        AuditEntry {
            id: "aud-00000000000000000000000000000002".to_string(),
            item_key: "cfg-1".to_string(),
            modification_time: "2026-08-06T12:00:01Z".parse().unwrap(),
            change: AuditChange::Updated {
                old_value: 42.0,
                new_value: 50.0,
                updated_attribute: "value".to_string(),
            },
        }
    }

    #[test]
    fn created_entry_roundtrip() {
        let entry = created_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let recovered: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, entry);
    }

    #[test]
    fn updated_entry_roundtrip() {
        let entry = updated_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let recovered: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, entry);
    }

    #[test]
    fn change_fields_are_flattened() {
        let json = serde_json::to_value(created_entry()).unwrap();
        assert!(json.get("change").is_none());
        assert_eq!(json["new_value"]["key"], "cfg-1");
        assert_eq!(json["new_value"]["value"], 42.0);
    }

    #[test]
    fn created_entry_has_no_update_fields() {
        let json = serde_json::to_value(created_entry()).unwrap();
        assert!(json.get("old_value").is_none());
        assert!(json.get("updated_attribute").is_none());
    }

    #[test]
    fn updated_entry_carries_all_three_fields() {
        let json = serde_json::to_value(updated_entry()).unwrap();
        assert_eq!(json["old_value"], 42.0);
        assert_eq!(json["new_value"], 50.0);
        assert_eq!(json["updated_attribute"], "value");
    }

    #[test]
    fn action_reports_change_kind() {
        assert_eq!(created_entry().change.action(), ChangeKind::Created);
        assert_eq!(updated_entry().change.action(), ChangeKind::Updated);
    }
}
