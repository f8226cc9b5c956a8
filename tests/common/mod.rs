//! Shared helpers for store integration tests.
#![allow(dead_code)]

use tempfile::TempDir;

use serialtrack_store::{
    Asn, AsnSerialAssignment, AsnStatus, SerialInventory, SerialStatus, SerialStore, StoreConfig,
};

/// Store backed by a fresh temp database, without the default seed so tests
/// control the exact dataset. The TempDir must outlive the store.
pub async fn create_empty_store() -> (SerialStore, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let mut config = StoreConfig::with_db_path(dir.path().join("state.redb"));
    config.seed_on_empty = false;

    let store = SerialStore::new(config);
    store.init().await;
    (store, dir)
}

pub fn create_test_serial(id: &str, serial_number: &str) -> SerialInventory {
    let mut serial = SerialInventory::new("sup1", "buy1", "1", serial_number, "tester");
    serial.id = id.to_string();
    serial
}

pub fn create_test_asn(id: &str, asn_number: &str, status: AsnStatus) -> Asn {
    let mut asn = Asn::new("sup1", "buy1", asn_number);
    asn.id = id.to_string();
    asn.status = status;
    asn
}

pub fn create_test_assignment(id: &str, serial_number: &str) -> AsnSerialAssignment {
    let mut assignment =
        AsnSerialAssignment::new("sup1", "1", serial_number, "item1", "lot1", "package1");
    assignment.id = id.to_string();
    assignment
}

/// One draft ASN holding one assignment for `serial_number`, plus a matching
/// unassigned serial — the starting state of the cascade scenarios.
pub async fn store_with_draft_asn(serial_number: &str) -> (SerialStore, TempDir) {
    let (store, dir) = create_empty_store().await;

    store.add_serials(vec![create_test_serial("serial-1", serial_number)]);

    let mut asn = create_test_asn("asn-1", "ASN-2024-001", AsnStatus::Draft);
    asn.serial_assignments
        .push(create_test_assignment("assignment-1", serial_number));
    store.add_asn(asn);

    (store, dir)
}

pub fn serial_status(store: &SerialStore, serial_number: &str) -> SerialStatus {
    store
        .state()
        .serials
        .iter()
        .find(|serial| serial.serial_number == serial_number)
        .map(|serial| serial.status)
        .expect("serial present")
}
