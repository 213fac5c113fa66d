//! Entity structs for the Scribe domain.
//!
//! `AuditEntry` maps to the audit table in the libSQL store. All structs
//! derive `Serialize`/`Deserialize` for JSON roundtrip.

mod audit;
mod item;

pub use audit::{AuditChange, AuditEntry};
pub use item::ItemSnapshot;
