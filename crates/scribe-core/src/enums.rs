//! Change kind classification.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of mutation a change record describes.
///
/// Feeds may emit kinds beyond the three this system understands;
/// `#[serde(other)]` folds those into `Unknown` instead of failing
/// deserialization of the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Updated,
    Removed,
    #[serde(other)]
    Unknown,
}

impl ChangeKind {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Removed => "removed",
            Self::Unknown => "unknown",
        }
    }

    /// Whether records of this kind produce an audit entry.
    ///
    /// Only creations and updates are audited; removals and unrecognized
    /// kinds are skipped without a write.
    #[must_use]
    pub const fn is_audited(self) -> bool {
        matches!(self, Self::Created | Self::Updated)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn serde_roundtrip() {
        for kind in [
            ChangeKind::Created,
            ChangeKind::Updated,
            ChangeKind::Removed,
            ChangeKind::Unknown,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            let recovered: ChangeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(recovered, kind);
        }
    }

    #[test]
    fn unrecognized_kind_deserializes_as_unknown() {
        let kind: ChangeKind = serde_json::from_str("\"truncated\"").unwrap();
        assert_eq!(kind, ChangeKind::Unknown);
    }

    #[test]
    fn only_created_and_updated_are_audited() {
        assert!(ChangeKind::Created.is_audited());
        assert!(ChangeKind::Updated.is_audited());
        assert!(!ChangeKind::Removed.is_audited());
        assert!(!ChangeKind::Unknown.is_audited());
    }
}
