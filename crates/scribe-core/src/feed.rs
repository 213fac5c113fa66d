//! Change-feed record envelope.
//!
//! The change-feed subscription on the tracked-record store delivers an
//! ordered `ChangeBatch` per invocation. Each `ChangeRecord` carries the
//! record's before/after snapshots as loosely-typed images; at least one
//! image is present for any record the auditor acts on.

use serde::{Deserialize, Serialize};

use crate::attr::AttrMap;
use crate::enums::ChangeKind;

/// One mutation to a tracked record, as delivered by the change feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// What kind of mutation this represents.
    pub kind: ChangeKind,

    /// Record state before the mutation. Absent for creations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_image: Option<AttrMap>,

    /// Record state after the mutation. Absent for removals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_image: Option<AttrMap>,
}

impl ChangeRecord {
    /// A creation record carrying only the new image.
    #[must_use]
    pub const fn created(new_image: AttrMap) -> Self {
        Self {
            kind: ChangeKind::Created,
            old_image: None,
            new_image: Some(new_image),
        }
    }

    /// An update record carrying both images.
    #[must_use]
    pub const fn updated(old_image: AttrMap, new_image: AttrMap) -> Self {
        Self {
            kind: ChangeKind::Updated,
            old_image: Some(old_image),
            new_image: Some(new_image),
        }
    }

    /// A removal record carrying only the old image.
    #[must_use]
    pub const fn removed(old_image: AttrMap) -> Self {
        Self {
            kind: ChangeKind::Removed,
            old_image: Some(old_image),
            new_image: None,
        }
    }
}

/// An ordered batch of change records, one delivery from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeBatch {
    pub records: Vec<ChangeRecord>,
}
