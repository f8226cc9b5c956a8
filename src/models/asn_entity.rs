use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};
use uuid::Uuid;

/// ASN lifecycle status.
///
/// `Submitted` is the only status under which referenced serials are marked
/// `Assigned`; every other status blocks them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AsnStatus {
    Draft,
    Submitted,
    Received,
    Cancelled,
    OnHold,
}

impl fmt::Display for AsnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsnStatus::Draft => write!(f, "draft"),
            AsnStatus::Submitted => write!(f, "submitted"),
            AsnStatus::Received => write!(f, "received"),
            AsnStatus::Cancelled => write!(f, "cancelled"),
            AsnStatus::OnHold => write!(f, "on_hold"),
        }
    }
}

/// A lot within an ASN line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsnLot {
    pub id: String,
    pub item_id: String,
    pub lot_number: String,
    pub quantity: u32,
}

/// One line item on an ASN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsnItem {
    pub id: String,
    pub asn_id: String,
    pub buyer_part_number: String,
    pub ship_quantity: u32,
    #[serde(default)]
    pub lots: Vec<AsnLot>,
}

impl AsnItem {
    /// Sum of lot quantities. Not enforced against `ship_quantity`.
    pub fn lot_quantity_total(&self) -> u32 {
        self.lots.iter().map(|lot| lot.quantity).sum()
    }
}

/// Binds one serial number to an ASN line item, lot, and package.
///
/// Owned by the ASN; not a top-level entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsnSerialAssignment {
    pub id: String,
    pub supplier_id: String,
    pub part_number_id: String,
    pub serial_number: String,
    pub line_id: String,
    pub lot_line_id: String,
    pub package_id: String,
    pub assigned_date: DateTime<Utc>,
}

impl AsnSerialAssignment {
    pub fn new(
        supplier_id: impl Into<String>,
        part_number_id: impl Into<String>,
        serial_number: impl Into<String>,
        line_id: impl Into<String>,
        lot_line_id: impl Into<String>,
        package_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            supplier_id: supplier_id.into(),
            part_number_id: part_number_id.into(),
            serial_number: serial_number.into(),
            line_id: line_id.into(),
            lot_line_id: lot_line_id.into(),
            package_id: package_id.into(),
            assigned_date: Utc::now(),
        }
    }
}

/// Advance Shipment Notice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asn {
    pub id: String,

    pub supplier_id: String,

    pub buyer_id: String,

    pub asn_number: String,

    pub status: AsnStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub items: Vec<AsnItem>,

    #[serde(default)]
    pub serial_assignments: Vec<AsnSerialAssignment>,

    pub created_date: DateTime<Utc>,

    pub updated_date: DateTime<Utc>,
}

impl Asn {
    /// Creates a new draft ASN with no items or assignments.
    pub fn new(
        supplier_id: impl Into<String>,
        buyer_id: impl Into<String>,
        asn_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            supplier_id: supplier_id.into(),
            buyer_id: buyer_id.into(),
            asn_number: asn_number.into(),
            status: AsnStatus::Draft,
            ship_date: None,
            delivery_date: None,
            items: Vec::new(),
            serial_assignments: Vec::new(),
            created_date: now,
            updated_date: now,
        }
    }

    /// Serial numbers referenced by this ASN's assignment list, in order.
    pub fn assigned_serial_numbers(&self) -> impl Iterator<Item = &str> {
        self.serial_assignments
            .iter()
            .map(|assignment| assignment.serial_number.as_str())
    }
}
