//! ID prefix constants.
//!
//! Entity ids are `{prefix}-{hex}` strings generated by the store (see
//! `AuditStore::generate_id`). Prefixes are three lowercase letters.

/// Prefix for audit entry ids.
pub const PREFIX_AUDIT: &str = "aud";
