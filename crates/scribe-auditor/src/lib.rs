//! # scribe-auditor
//!
//! The Change Auditor: consumes batches of change records from the
//! tracked-record store's change feed and writes one audit entry per
//! created or updated record to the audit store.
//!
//! The auditor is stateless and synchronous with respect to a delivered
//! batch. It trusts the before/after images embedded in each record — it
//! never queries the tracked-record store itself. Duplicate deliveries
//! produce duplicate entries under fresh ids, never overwrites.

pub mod error;
pub mod producer;

pub use error::AuditorError;
pub use producer::ChangeAuditor;
