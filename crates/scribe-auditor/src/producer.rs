//! Change-record to audit-entry transformation.
//!
//! `ChangeAuditor` consumes batches from the change feed. Per record:
//! classify by kind, extract the item key and values from the before/after
//! images, generate a fresh id, and persist one audit entry. Removals and
//! unrecognized kinds produce nothing.
//!
//! Batch policy: records are processed strictly in delivery order and the
//! first failure aborts the batch. There is no per-record fault isolation
//! and no partial-success report — the feed redelivers the whole batch,
//! and redelivered records produce duplicate entries under fresh ids
//! rather than corrupting existing ones.

use chrono::Utc;

use scribe_config::StoreConfig;
use scribe_core::attr::{AttrMap, number_attr, string_attr};
use scribe_core::entities::{AuditChange, AuditEntry, ItemSnapshot};
use scribe_core::enums::ChangeKind;
use scribe_core::feed::ChangeRecord;
use scribe_core::ids::PREFIX_AUDIT;
use scribe_db::AuditStore;

use crate::error::AuditorError;

/// The tracked record's identity attribute.
const KEY_ATTR: &str = "key";
/// The only attribute whose changes are audited.
const VALUE_ATTR: &str = "value";

/// Turns change records into persisted audit entries.
///
/// Stateless apart from its configuration: no caching, no cross-batch
/// state, no ordering guarantees beyond the order of the delivered batch.
pub struct ChangeAuditor {
    config: StoreConfig,
}

impl ChangeAuditor {
    /// Create an auditor writing to the store described by `config`.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The store configuration this auditor writes with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Process one delivered batch against a freshly opened store.
    ///
    /// The store is acquired at the start of the call and released when the
    /// call returns — on success and on every failure path alike.
    ///
    /// # Errors
    ///
    /// Returns `AuditorError::Store` if the store cannot be opened, or
    /// whatever `process_batch` fails with.
    pub async fn run_batch(&self, batch: &[ChangeRecord]) -> Result<u32, AuditorError> {
        let store = AuditStore::open(&self.config)
            .await
            .map_err(AuditorError::Store)?;
        self.process_batch(&store, batch).await
    }

    /// Process a batch against an already-open store.
    ///
    /// Returns the number of audit entries written. The first failing
    /// record aborts the batch; entries written before it remain.
    ///
    /// # Errors
    ///
    /// Propagates the first error from `process_one`.
    pub async fn process_batch(
        &self,
        store: &AuditStore,
        batch: &[ChangeRecord],
    ) -> Result<u32, AuditorError> {
        let mut written = 0u32;
        for record in batch {
            if self.process_one(store, record).await?.is_some() {
                written += 1;
            }
        }
        tracing::debug!(
            "Wrote {written} audit entries for {} change records",
            batch.len()
        );
        Ok(written)
    }

    /// Transform and persist one change record.
    ///
    /// Returns the persisted entry, or `None` for kinds that are not
    /// audited (removals and unknowns) — those perform zero writes.
    ///
    /// # Errors
    ///
    /// `MissingAttribute` if a required image attribute is absent,
    /// `Store` if id generation fails, `Write` if the insert fails.
    pub async fn process_one(
        &self,
        store: &AuditStore,
        record: &ChangeRecord,
    ) -> Result<Option<AuditEntry>, AuditorError> {
        let Some((item_key, change)) = change_for(record)? else {
            tracing::trace!("Skipping {} change record", record.kind);
            return Ok(None);
        };

        let id = store
            .generate_id(PREFIX_AUDIT)
            .await
            .map_err(AuditorError::Store)?;
        let entry = AuditEntry {
            id,
            item_key,
            modification_time: Utc::now(),
            change,
        };
        store.put_entry(&entry).await.map_err(AuditorError::Write)?;
        Ok(Some(entry))
    }
}

/// Read a required numeric attribute from an image side.
fn required_number(image: &AttrMap, side: &'static str) -> Result<f64, AuditorError> {
    number_attr(image, VALUE_ATTR).ok_or(AuditorError::MissingAttribute {
        image: side,
        attribute: VALUE_ATTR,
    })
}

/// The pure classification step: decide what audit fact a record yields.
///
/// `Ok(None)` for kinds that are not audited. For created and updated
/// records the item key always comes from the new image — a record
/// without a usable new image cannot be audited at all.
fn change_for(record: &ChangeRecord) -> Result<Option<(String, AuditChange)>, AuditorError> {
    match record.kind {
        ChangeKind::Removed | ChangeKind::Unknown => Ok(None),
        ChangeKind::Created | ChangeKind::Updated => {
            let new_image =
                record
                    .new_image
                    .as_ref()
                    .ok_or(AuditorError::MissingAttribute {
                        image: "new",
                        attribute: KEY_ATTR,
                    })?;
            let item_key = string_attr(new_image, KEY_ATTR)
                .ok_or(AuditorError::MissingAttribute {
                    image: "new",
                    attribute: KEY_ATTR,
                })?
                .to_string();
            let new_value = required_number(new_image, "new")?;

            let change = if record.kind == ChangeKind::Created {
                AuditChange::Created {
                    new_value: ItemSnapshot {
                        key: item_key.clone(),
                        value: new_value,
                    },
                }
            } else {
                // An absent before image and a before image without a value
                // are the same failure: the prior value is unavailable.
                let old_value = record
                    .old_image
                    .as_ref()
                    .and_then(|image| number_attr(image, VALUE_ATTR))
                    .ok_or(AuditorError::MissingAttribute {
                        image: "old",
                        attribute: VALUE_ATTR,
                    })?;
                AuditChange::Updated {
                    old_value,
                    new_value,
                    updated_attribute: VALUE_ATTR.to_string(),
                }
            };

            Ok(Some((item_key, change)))
        }
    }
}
