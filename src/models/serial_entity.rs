use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Lifecycle status of a serialized unit.
///
/// `Assigned` and `Blocked` both imply the serial is referenced by an ASN's
/// assignment list; `Unassigned` implies no ASN link.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SerialStatus {
    Unassigned,
    Blocked,
    Assigned,
}

/// A single serialized inventory unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerialInventory {
    pub id: String,

    pub supplier_id: String,

    pub buyer_id: String,

    /// Catalog part this unit was produced against.
    pub part_number_id: String,

    /// Unique within the owning supplier's scope.
    pub serial_number: String,

    pub status: SerialStatus,

    /// Set whenever status is `Assigned` or `Blocked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,

    /// Free-form attributes (manufacturer, model, batch, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    pub created_date: DateTime<Utc>,

    pub updated_date: DateTime<Utc>,

    pub created_by: String,

    pub updated_by: String,
}

impl SerialInventory {
    /// Creates a fresh, unassigned serial record.
    pub fn new(
        supplier_id: impl Into<String>,
        buyer_id: impl Into<String>,
        part_number_id: impl Into<String>,
        serial_number: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let actor = created_by.into();

        Self {
            id: Uuid::new_v4().to_string(),
            supplier_id: supplier_id.into(),
            buyer_id: buyer_id.into(),
            part_number_id: part_number_id.into(),
            serial_number: serial_number.into(),
            status: SerialStatus::Unassigned,
            asn_id: None,
            expiry_date: None,
            attributes: BTreeMap::new(),
            created_date: now,
            updated_date: now,
            created_by: actor.clone(),
            updated_by: actor,
        }
    }
}
