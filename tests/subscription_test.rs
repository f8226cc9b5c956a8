//! Subscription bus semantics through the store facade.

mod common;

use common::*;
use serialtrack_store::{AsnStatus, SerialStatus};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn subscriber_gets_current_snapshot_immediately() {
    let (store, _dir) = create_empty_store().await;
    store.add_serials(vec![create_test_serial("a", "SN-A")]);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.serials.len()));

    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn one_notification_per_mutation() {
    let (store, _dir) = create_empty_store().await;

    let notifications = Arc::new(Mutex::new(0usize));
    let counter = notifications.clone();
    store.subscribe(move |_| *counter.lock().unwrap() += 1);

    store.add_serials(vec![create_test_serial("a", "SN-A")]);
    store.set_loading(true);
    store.set_loading(false);

    // 1 initial + 3 mutations, no coalescing.
    assert_eq!(*notifications.lock().unwrap(), 4);
}

#[tokio::test]
async fn observers_fire_in_registration_order() {
    let (store, _dir) = create_empty_store().await;

    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second"] {
        let order = order.clone();
        store.subscribe(move |_| order.lock().unwrap().push(tag));
    }
    order.lock().unwrap().clear();

    store.set_loading(true);
    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[tokio::test]
async fn unsubscribe_stops_notifications() {
    let (store, _dir) = create_empty_store().await;

    let notifications = Arc::new(Mutex::new(0usize));
    let counter = notifications.clone();
    let subscription = store.subscribe(move |_| *counter.lock().unwrap() += 1);

    subscription.unsubscribe();
    store.set_loading(true);

    assert_eq!(*notifications.lock().unwrap(), 1, "only the initial call");
}

#[tokio::test]
async fn cascade_steps_are_individually_observable() {
    let (store, _dir) = store_with_draft_asn("SN001").await;

    let statuses = Arc::new(Mutex::new(Vec::new()));
    let sink = statuses.clone();
    store.subscribe(move |snapshot| {
        if let Some(serial) = snapshot.find_serial("serial-1") {
            sink.lock().unwrap().push(serial.status);
        }
    });
    statuses.lock().unwrap().clear();

    let mut asn = store.state().find_asn("asn-1").cloned().unwrap();
    asn.status = AsnStatus::Submitted;
    store.update_asn(asn);

    // First write: ASN replaced, serial untouched. Second: cascade applied.
    assert_eq!(
        *statuses.lock().unwrap(),
        vec![SerialStatus::Unassigned, SerialStatus::Assigned]
    );
}

#[tokio::test]
async fn guard_override_is_observable_as_two_writes() {
    let (store, _dir) = store_with_draft_asn("SN001").await;

    let statuses = Arc::new(Mutex::new(Vec::new()));
    let sink = statuses.clone();
    store.subscribe(move |snapshot| {
        if let Some(serial) = snapshot.find_serial("serial-1") {
            sink.lock().unwrap().push(serial.status);
        }
    });
    statuses.lock().unwrap().clear();

    store.update_serial_status("serial-1", SerialStatus::Assigned, Some("asn-1"));

    assert_eq!(
        *statuses.lock().unwrap(),
        vec![SerialStatus::Assigned, SerialStatus::Blocked]
    );
}
