//! serialtrack-store
//!
//! Client-side state core for an inventory-tracking UI over serialized
//! parts shipped against advance-shipment-notices (ASNs). One in-memory
//! authoritative snapshot, persisted best-effort to a local redb file,
//! with cross-entity consistency between serial records and the ASNs that
//! reference them.
//!
//! ```no_run
//! use serialtrack_store::{SerialStore, StoreConfig};
//!
//! # async fn run() {
//! let store = SerialStore::new(StoreConfig::default());
//! store.init().await;
//!
//! let counts = store.serial_counts();
//! println!("{} serials tracked", counts.total);
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod commands;
pub mod config;
pub mod db;
pub mod errors;
pub mod events;
pub mod logging;
pub mod models;
pub mod queries;
pub mod seed;
pub mod serials;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use events::Subscription;
pub use models::{
    Asn, AsnItem, AsnLot, AsnSerialAssignment, AsnStatus, Product, SerialInventory, SerialStatus,
};
pub use queries::SerialCounts;
pub use serials::{generate_serial_range, parse_serial_lines};
pub use state::{Modal, SearchScope, StateSnapshot};
pub use store::SerialStore;
