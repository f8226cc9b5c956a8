//! Fixed first-run dataset.
//!
//! Used to seed the snapshot when the durable store holds no prior state,
//! so the application is usable on first launch.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

use crate::models::{
    Asn, AsnItem, AsnLot, AsnSerialAssignment, AsnStatus, Product, SerialInventory, SerialStatus,
};
use crate::state::StateSnapshot;

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Literal dates only; always valid.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn attributes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    buyer_identifier: &str,
    supplier_identifier: &str,
    buyer_part_number: &str,
    description: &str,
    price: f64,
    dimensions: &str,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        buyer_identifier: buyer_identifier.to_string(),
        supplier_identifier: supplier_identifier.to_string(),
        buyer_part_number: buyer_part_number.to_string(),
        description: description.to_string(),
        price,
        dimensions: dimensions.to_string(),
        created_date: created,
        updated_date: updated,
    }
}

#[allow(clippy::too_many_arguments)]
fn serial(
    id: &str,
    part_number_id: &str,
    serial_number: &str,
    status: SerialStatus,
    asn_id: Option<&str>,
    attrs: BTreeMap<String, String>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
) -> SerialInventory {
    SerialInventory {
        id: id.to_string(),
        supplier_id: "sup1".to_string(),
        buyer_id: "buy1".to_string(),
        part_number_id: part_number_id.to_string(),
        serial_number: serial_number.to_string(),
        status,
        asn_id: asn_id.map(str::to_string),
        expiry_date: None,
        attributes: attrs,
        created_date: created,
        updated_date: updated,
        created_by: "admin".to_string(),
        updated_by: "admin".to_string(),
    }
}

fn assignment(
    id: &str,
    part_number_id: &str,
    serial_number: &str,
    line_id: &str,
    lot_line_id: &str,
    package_id: &str,
    assigned: DateTime<Utc>,
) -> AsnSerialAssignment {
    AsnSerialAssignment {
        id: id.to_string(),
        supplier_id: "sup1".to_string(),
        part_number_id: part_number_id.to_string(),
        serial_number: serial_number.to_string(),
        line_id: line_id.to_string(),
        lot_line_id: lot_line_id.to_string(),
        package_id: package_id.to_string(),
        assigned_date: assigned,
    }
}

fn item(id: &str, asn_id: &str, buyer_part_number: &str, ship_quantity: u32, lots: Vec<AsnLot>) -> AsnItem {
    AsnItem {
        id: id.to_string(),
        asn_id: asn_id.to_string(),
        buyer_part_number: buyer_part_number.to_string(),
        ship_quantity,
        lots,
    }
}

fn lot(id: &str, item_id: &str, lot_number: &str, quantity: u32) -> AsnLot {
    AsnLot {
        id: id.to_string(),
        item_id: item_id.to_string(),
        lot_number: lot_number.to_string(),
        quantity,
    }
}

pub fn default_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "ACME_CORP",
            "TECH_SUPPLY_001",
            "CPU-001-X7",
            "High-performance processor unit with enhanced cooling",
            299.99,
            "40mm x 40mm x 5mm",
            day(2024, 1, 15),
            day(2024, 1, 20),
        ),
        product(
            "2",
            "ACME_CORP",
            "TECH_SUPPLY_001",
            "MEM-002-DDR5",
            "DDR5 Memory Module 32GB",
            189.99,
            "133mm x 30mm x 5mm",
            day(2024, 1, 10),
            day(2024, 1, 18),
        ),
        product(
            "3",
            "BETA_SYSTEMS",
            "COMPONENT_PLUS",
            "SSD-003-NVMe",
            "NVMe SSD 1TB High Speed Storage",
            149.99,
            "80mm x 22mm x 2.38mm",
            day(2024, 1, 12),
            day(2024, 1, 22),
        ),
        product(
            "4",
            "GAMING_TECH",
            "GRAPHICS_PRO",
            "GPU-004-RTX",
            "RTX 4070 Graphics Card 12GB GDDR6X",
            599.99,
            "285mm x 126mm x 50mm",
            day(2024, 1, 14),
            day(2024, 1, 24),
        ),
        product(
            "5",
            "GAMING_TECH",
            "GRAPHICS_PRO",
            "MB-005-Z690",
            "Intel Z690 Motherboard ATX",
            249.99,
            "305mm x 244mm x 6mm",
            day(2024, 1, 16),
            day(2024, 1, 26),
        ),
        product(
            "6",
            "POWER_SOLUTIONS",
            "ENERGY_TECH",
            "PSU-006-850W",
            "850W Modular Power Supply 80+ Gold",
            129.99,
            "150mm x 86mm x 140mm",
            day(2024, 1, 18),
            day(2024, 1, 28),
        ),
        product(
            "7",
            "POWER_SOLUTIONS",
            "ENERGY_TECH",
            "CASE-007-ATX",
            "ATX Mid Tower Case with Tempered Glass",
            89.99,
            "450mm x 200mm x 450mm",
            day(2024, 1, 20),
            day(2024, 1, 30),
        ),
        product(
            "8",
            "ACME_CORP",
            "TECH_SUPPLY_001",
            "COOL-008-AIO",
            "240mm All-in-One Liquid CPU Cooler",
            119.99,
            "280mm x 120mm x 27mm",
            day(2024, 1, 22),
            day(2024, 2, 1),
        ),
        product(
            "9",
            "GAMING_TECH",
            "GRAPHICS_PRO",
            "FAN-009-120MM",
            "120mm PWM Case Fan with RGB",
            24.99,
            "120mm x 120mm x 25mm",
            day(2024, 1, 24),
            day(2024, 2, 3),
        ),
    ]
}

pub fn default_serials() -> Vec<SerialInventory> {
    vec![
        serial(
            "1",
            "1",
            "CPU001X7001",
            SerialStatus::Blocked,
            Some("1"),
            attributes(&[
                ("Manufacturer", "Intel"),
                ("Model", "Core i7-12700K"),
                ("Warranty", "3 years"),
                ("Batch", "B2024-001"),
            ]),
            day(2024, 1, 15),
            day(2024, 1, 20),
        ),
        serial(
            "2",
            "1",
            "CPU001X7002",
            SerialStatus::Assigned,
            Some("1"),
            attributes(&[
                ("Manufacturer", "Intel"),
                ("Model", "Core i7-12700K"),
                ("Warranty", "3 years"),
                ("Batch", "B2024-002"),
            ]),
            day(2024, 1, 16),
            day(2024, 1, 21),
        ),
        serial(
            "3",
            "1",
            "CPU001X7003",
            SerialStatus::Unassigned,
            None,
            attributes(&[
                ("Manufacturer", "Intel"),
                ("Model", "Core i7-12700K"),
                ("Warranty", "3 years"),
                ("Batch", "B2024-003"),
            ]),
            day(2024, 1, 17),
            day(2024, 1, 17),
        ),
        serial(
            "4",
            "1",
            "CPU001X7004",
            SerialStatus::Unassigned,
            None,
            attributes(&[
                ("Manufacturer", "Intel"),
                ("Model", "Core i7-12700K"),
                ("Warranty", "3 years"),
                ("Batch", "B2024-004"),
            ]),
            day(2024, 1, 18),
            day(2024, 1, 18),
        ),
        serial(
            "5",
            "2",
            "MEM002DDR5001",
            SerialStatus::Unassigned,
            None,
            attributes(&[
                ("Manufacturer", "Corsair"),
                ("Model", "Vengeance DDR5-5600"),
                ("Capacity", "32GB"),
                ("Batch", "B2024-005"),
            ]),
            day(2024, 1, 19),
            day(2024, 1, 19),
        ),
        serial(
            "6",
            "2",
            "MEM002DDR5002",
            SerialStatus::Blocked,
            Some("1"),
            attributes(&[
                ("Manufacturer", "Corsair"),
                ("Model", "Vengeance DDR5-5600"),
                ("Capacity", "32GB"),
                ("Batch", "B2024-006"),
            ]),
            day(2024, 1, 20),
            day(2024, 1, 25),
        ),
        serial(
            "7",
            "3",
            "SSD003NVME001",
            SerialStatus::Unassigned,
            None,
            attributes(&[
                ("Manufacturer", "Samsung"),
                ("Model", "970 EVO Plus"),
                ("Capacity", "1TB"),
                ("Interface", "NVMe"),
            ]),
            day(2024, 1, 21),
            day(2024, 1, 21),
        ),
        serial(
            "8",
            "3",
            "SSD003NVME002",
            SerialStatus::Assigned,
            Some("1"),
            attributes(&[
                ("Manufacturer", "Samsung"),
                ("Model", "970 EVO Plus"),
                ("Capacity", "1TB"),
                ("Interface", "NVMe"),
            ]),
            day(2024, 1, 22),
            day(2024, 1, 27),
        ),
    ]
}

pub fn default_asns() -> Vec<Asn> {
    vec![
        Asn {
            id: "1".to_string(),
            supplier_id: "sup1".to_string(),
            buyer_id: "buy1".to_string(),
            asn_number: "ASN-2024-001".to_string(),
            status: AsnStatus::Draft,
            ship_date: Some(day(2024, 2, 15)),
            delivery_date: Some(day(2024, 2, 20)),
            items: vec![
                item(
                    "item1",
                    "1",
                    "CPU-001-X7",
                    10,
                    vec![
                        lot("lot1", "item1", "LOT001", 5),
                        lot("lot2", "item1", "LOT002", 5),
                    ],
                ),
                item(
                    "item2",
                    "1",
                    "MEM-002-DDR5",
                    20,
                    vec![
                        lot("lot3", "item2", "LOT003", 15),
                        lot("lot4", "item2", "LOT004", 5),
                    ],
                ),
                item(
                    "item3",
                    "1",
                    "SSD-003-NVMe",
                    8,
                    vec![lot("lot5", "item3", "LOT005", 8)],
                ),
                item(
                    "item8",
                    "1",
                    "COOL-008-AIO",
                    5,
                    vec![lot("lot8", "item8", "LOT008", 5)],
                ),
            ],
            serial_assignments: vec![
                assignment(
                    "1",
                    "1",
                    "CPU001X7001",
                    "item1",
                    "lot1",
                    "package1",
                    day(2024, 1, 15),
                ),
                assignment(
                    "2",
                    "1",
                    "CPU001X7002",
                    "item1",
                    "lot1",
                    "package1",
                    day(2024, 1, 16),
                ),
            ],
            created_date: day(2024, 1, 15),
            updated_date: day(2024, 1, 20),
        },
        Asn {
            id: "2".to_string(),
            supplier_id: "sup2".to_string(),
            buyer_id: "buy2".to_string(),
            asn_number: "ASN-2024-002".to_string(),
            status: AsnStatus::Submitted,
            ship_date: Some(day(2024, 2, 20)),
            delivery_date: Some(day(2024, 2, 25)),
            items: vec![
                item(
                    "item4",
                    "2",
                    "GPU-004-RTX",
                    5,
                    vec![lot("lot6", "item4", "LOT006", 5)],
                ),
                item(
                    "item5",
                    "2",
                    "MB-005-Z690",
                    8,
                    vec![lot("lot7", "item5", "LOT007", 8)],
                ),
            ],
            serial_assignments: vec![assignment(
                "3",
                "2",
                "MEM002DDR5002",
                "item2",
                "lot3",
                "package2",
                day(2024, 1, 20),
            )],
            created_date: day(2024, 1, 18),
            updated_date: day(2024, 1, 25),
        },
        Asn {
            id: "3".to_string(),
            supplier_id: "sup3".to_string(),
            buyer_id: "buy3".to_string(),
            asn_number: "ASN-2024-003".to_string(),
            status: AsnStatus::Received,
            ship_date: Some(day(2024, 2, 10)),
            delivery_date: Some(day(2024, 2, 15)),
            items: vec![
                item(
                    "item6",
                    "3",
                    "PSU-006-850W",
                    12,
                    vec![lot("lot9", "item6", "LOT009", 12)],
                ),
                item(
                    "item7",
                    "3",
                    "CASE-007-ATX",
                    15,
                    vec![lot("lot10", "item7", "LOT010", 15)],
                ),
            ],
            serial_assignments: vec![assignment(
                "4",
                "3",
                "SSD003NVME002",
                "item3",
                "lot5",
                "package3",
                day(2024, 1, 22),
            )],
            created_date: day(2024, 1, 20),
            updated_date: day(2024, 1, 30),
        },
    ]
}

/// The complete first-run snapshot: seeded entities, default UI and system
/// substate.
pub fn default_snapshot() -> StateSnapshot {
    StateSnapshot {
        serials: default_serials(),
        asns: default_asns(),
        products: default_products(),
        ..StateSnapshot::default()
    }
}
