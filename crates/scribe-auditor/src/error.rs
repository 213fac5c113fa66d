//! Auditor error types.
//!
//! None of these are recovered locally. An error aborts the batch and
//! propagates to the delivery mechanism, which is expected to redeliver
//! the whole batch.

use thiserror::Error;

use scribe_db::error::DatabaseError;

/// Errors from processing a batch of change records.
#[derive(Debug, Error)]
pub enum AuditorError {
    /// A required attribute is absent from a record image.
    #[error("Missing required attribute '{attribute}' in {image} image")]
    MissingAttribute {
        image: &'static str,
        attribute: &'static str,
    },

    /// The audit store rejected or could not complete a write.
    #[error("Audit write failed: {0}")]
    Write(#[source] DatabaseError),

    /// The audit store could not be acquired or could not serve the auditor.
    #[error("Audit store unavailable: {0}")]
    Store(#[source] DatabaseError),
}
