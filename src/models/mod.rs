//! Entity models for the serial-inventory domain.

pub mod asn_entity;
pub mod product_entity;
pub mod serial_entity;

pub use asn_entity::{Asn, AsnItem, AsnLot, AsnSerialAssignment, AsnStatus};
pub use product_entity::Product;
pub use serial_entity::{SerialInventory, SerialStatus};
