//! Audit store integration tests.
//!
//! - Put/get/query round-trips for both change payload shapes
//! - Filter behavior (item key, action, limit)
//! - Newest-first ordering with stable ties
//! - On-disk persistence across store handles

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use scribe_config::StoreConfig;
use scribe_core::entities::{AuditChange, AuditEntry, ItemSnapshot};
use scribe_core::enums::ChangeKind;
use scribe_db::AuditStore;
use scribe_db::audit::AuditFilter;
use scribe_db::error::DatabaseError;

async fn test_store() -> AuditStore {
    let config = StoreConfig {
        path: ":memory:".into(),
        ..Default::default()
    };
    AuditStore::open(&config).await.unwrap()
}

fn created_entry(id: &str, item_key: &str, value: f64) -> AuditEntry {
    AuditEntry {
        id: id.to_string(),
        item_key: item_key.to_string(),
        modification_time: Utc::now(),
        change: AuditChange::Created {
            new_value: ItemSnapshot {
                key: item_key.to_string(),
                value,
            },
        },
    }
}

fn updated_entry(id: &str, item_key: &str, old: f64, new: f64) -> AuditEntry {
    AuditEntry {
        id: id.to_string(),
        item_key: item_key.to_string(),
        modification_time: Utc::now(),
        change: AuditChange::Updated {
            old_value: old,
            new_value: new,
            updated_attribute: "value".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_and_get_created_entry() {
    let store = test_store().await;
    let entry = created_entry("aud-00000001", "cfg-1", 42.0);

    store.put_entry(&entry).await.unwrap();
    let fetched = store.get_entry("aud-00000001").await.unwrap();

    assert_eq!(fetched.id, entry.id);
    assert_eq!(fetched.item_key, entry.item_key);
    assert_eq!(fetched.change, entry.change);
    // RFC 3339 storage keeps sub-second precision through the round-trip.
    assert_eq!(fetched.modification_time, entry.modification_time);
}

#[tokio::test]
async fn put_and_get_updated_entry() {
    let store = test_store().await;
    let entry = updated_entry("aud-00000002", "cfg-1", 42.0, 50.0);

    store.put_entry(&entry).await.unwrap();
    let fetched = store.get_entry("aud-00000002").await.unwrap();

    assert_eq!(
        fetched.change,
        AuditChange::Updated {
            old_value: 42.0,
            new_value: 50.0,
            updated_attribute: "value".to_string(),
        }
    );
}

#[tokio::test]
async fn get_missing_entry_is_no_result() {
    let store = test_store().await;
    let err = store.get_entry("aud-ffffffff").await.unwrap_err();
    assert!(matches!(err, DatabaseError::NoResult));
}

#[tokio::test]
async fn duplicate_id_insert_is_rejected() {
    let store = test_store().await;
    let entry = created_entry("aud-00000001", "cfg-1", 42.0);

    store.put_entry(&entry).await.unwrap();
    let err = store.put_entry(&entry).await.unwrap_err();
    assert!(matches!(err, DatabaseError::LibSql(_)));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn query_all_entries() {
    let store = test_store().await;
    for i in 0..3 {
        store
            .put_entry(&created_entry(&format!("aud-{i:08x}"), "cfg-1", 1.0))
            .await
            .unwrap();
    }

    let results = store.query_audit(&AuditFilter::default()).await.unwrap();
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn query_filter_by_item_key() {
    let store = test_store().await;
    store
        .put_entry(&created_entry("aud-00000001", "cfg-1", 1.0))
        .await
        .unwrap();
    store
        .put_entry(&created_entry("aud-00000002", "cfg-2", 2.0))
        .await
        .unwrap();

    let results = store
        .query_audit(&AuditFilter {
            item_key: Some("cfg-2".to_string()),
            ..AuditFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item_key, "cfg-2");
}

#[tokio::test]
async fn query_filter_by_action() {
    let store = test_store().await;
    store
        .put_entry(&created_entry("aud-00000001", "cfg-1", 1.0))
        .await
        .unwrap();
    store
        .put_entry(&updated_entry("aud-00000002", "cfg-1", 1.0, 2.0))
        .await
        .unwrap();

    let results = store
        .query_audit(&AuditFilter {
            action: Some(ChangeKind::Updated),
            ..AuditFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].change.action(), ChangeKind::Updated);
}

#[tokio::test]
async fn query_respects_limit() {
    let store = test_store().await;
    for i in 0..5 {
        store
            .put_entry(&created_entry(&format!("aud-{i:08x}"), "cfg-1", 1.0))
            .await
            .unwrap();
    }

    let results = store
        .query_audit(&AuditFilter {
            limit: Some(2),
            ..AuditFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn query_orders_newest_first() {
    let store = test_store().await;
    let base = Utc::now();

    for (i, offset) in [0i64, 1, 2].iter().enumerate() {
        let mut entry = created_entry(&format!("aud-{i:08x}"), "cfg-1", 1.0);
        entry.modification_time = base + Duration::seconds(*offset);
        store.put_entry(&entry).await.unwrap();
    }

    let results = store.query_audit(&AuditFilter::default()).await.unwrap();
    let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["aud-00000002", "aud-00000001", "aud-00000000"]);
}

#[tokio::test]
async fn equal_timestamps_tie_break_by_insertion_order() {
    let store = test_store().await;
    let now = Utc::now();

    for i in 0..3 {
        let mut entry = created_entry(&format!("aud-{i:08x}"), "cfg-1", 1.0);
        entry.modification_time = now;
        store.put_entry(&entry).await.unwrap();
    }

    let results = store.query_audit(&AuditFilter::default()).await.unwrap();
    let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
    // Newest-first means the last insert comes back first.
    assert_eq!(ids, ["aud-00000002", "aud-00000001", "aud-00000000"]);
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn entries_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        path: dir.path().join("audit.db").to_string_lossy().into_owned(),
        ..Default::default()
    };

    {
        let store = AuditStore::open(&config).await.unwrap();
        store
            .put_entry(&created_entry("aud-00000001", "cfg-1", 42.0))
            .await
            .unwrap();
    } // store dropped, connection released

    let store = AuditStore::open(&config).await.unwrap();
    let fetched = store.get_entry("aud-00000001").await.unwrap();
    assert_eq!(fetched.item_key, "cfg-1");
}
