//! Pure, read-only derivations over a state snapshot.
//!
//! Every function recomputes from scratch on each call; at the in-memory
//! data sizes involved there is nothing to cache.

pub mod asn_queries;
pub mod product_queries;
pub mod serial_queries;

pub use asn_queries::{assignments_by_asn, assignments_by_serial, filtered_asns};
pub use product_queries::filtered_products;
pub use serial_queries::{
    filtered_serials, serial_counts, serials_by_asn, serials_by_status, SerialCounts,
};
