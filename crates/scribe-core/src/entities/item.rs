use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a tracked configuration item.
///
/// Tracked records carry a string identity (`key`) and a numeric payload
/// (`value`); any other attributes a record may have are not tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub key: String,
    pub value: f64,
}
