//! Store lifecycle and serial CRUD accounting.

mod common;

use common::*;
use serialtrack_store::{SerialStatus, SerialStore, StoreConfig};
use tempfile::TempDir;

#[tokio::test]
async fn first_init_seeds_default_dataset() {
    let dir = TempDir::new().unwrap();
    let store = SerialStore::new(StoreConfig::with_db_path(dir.path().join("state.redb")));
    store.init().await;

    let counts = store.serial_counts();
    assert_eq!(counts.total, 8);
    assert_eq!(counts.unassigned, 4);
    assert_eq!(counts.blocked, 2);
    assert_eq!(counts.assigned, 2);

    let snapshot = store.state();
    assert_eq!(snapshot.asns.len(), 3);
    assert_eq!(snapshot.products.len(), 9);
}

#[tokio::test]
async fn counts_track_adds_and_deletes() {
    let (store, _dir) = create_empty_store().await;
    assert_eq!(store.serial_counts().total, 0);

    store.add_serials(vec![
        create_test_serial("a", "SN-A"),
        create_test_serial("b", "SN-B"),
    ]);
    store.add_serials(vec![create_test_serial("c", "SN-C")]);
    assert_eq!(store.serial_counts().total, 3);

    store.delete_serial("b");
    assert_eq!(store.serial_counts().total, 2);
}

#[tokio::test]
async fn deleting_unknown_serial_leaves_counts_unchanged() {
    let (store, _dir) = create_empty_store().await;
    store.add_serials(vec![create_test_serial("a", "SN-A")]);

    store.delete_serial("does-not-exist");
    assert_eq!(store.serial_counts().total, 1);
}

#[tokio::test]
async fn deleting_non_unassigned_serial_is_refused() {
    let (store, _dir) = create_empty_store().await;
    let mut blocked = create_test_serial("a", "SN-A");
    blocked.status = SerialStatus::Blocked;
    blocked.asn_id = Some("asn-1".to_string());
    store.add_serials(vec![blocked]);

    store.delete_serial("a");
    assert_eq!(store.serial_counts().total, 1);
    assert_eq!(serial_status(&store, "SN-A"), SerialStatus::Blocked);
}

#[tokio::test]
async fn update_serial_replaces_by_id() {
    let (store, _dir) = create_empty_store().await;
    store.add_serials(vec![create_test_serial("a", "SN-A")]);

    let mut updated = store.state().find_serial("a").cloned().unwrap();
    updated.serial_number = "SN-A-REV2".to_string();
    store.update_serial(updated);

    assert_eq!(store.state().serials[0].serial_number, "SN-A-REV2");
}

#[tokio::test]
async fn mutations_refresh_last_updated() {
    let (store, _dir) = create_empty_store().await;
    let before = store.state().system.last_updated;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    store.set_loading(true);

    let snapshot = store.state();
    assert!(snapshot.system.loading);
    assert!(snapshot.system.last_updated > before);
}

#[tokio::test]
async fn errors_accumulate_and_clear() {
    let (store, _dir) = create_empty_store().await;
    store.add_error("import failed");
    store.add_error("range invalid");
    assert_eq!(store.state().system.errors.len(), 2);

    store.clear_errors();
    assert!(store.state().system.errors.is_empty());
}
