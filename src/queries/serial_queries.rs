use serde::Serialize;

use crate::models::{SerialInventory, SerialStatus};
use crate::state::StateSnapshot;

/// Aggregate serial counts by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SerialCounts {
    pub total: usize,
    pub unassigned: usize,
    pub blocked: usize,
    pub assigned: usize,
}

pub fn serials_by_status(snapshot: &StateSnapshot, status: SerialStatus) -> Vec<SerialInventory> {
    snapshot
        .serials
        .iter()
        .filter(|serial| serial.status == status)
        .cloned()
        .collect()
}

pub fn serials_by_asn(snapshot: &StateSnapshot, asn_id: &str) -> Vec<SerialInventory> {
    snapshot
        .serials
        .iter()
        .filter(|serial| serial.asn_id.as_deref() == Some(asn_id))
        .cloned()
        .collect()
}

pub fn serial_counts(snapshot: &StateSnapshot) -> SerialCounts {
    let mut counts = SerialCounts {
        total: snapshot.serials.len(),
        ..SerialCounts::default()
    };
    for serial in &snapshot.serials {
        match serial.status {
            SerialStatus::Unassigned => counts.unassigned += 1,
            SerialStatus::Blocked => counts.blocked += 1,
            SerialStatus::Assigned => counts.assigned += 1,
        }
    }
    counts
}

/// Serials matching the active status filter AND the active search term
/// (case-insensitive substring over the serial number).
pub fn filtered_serials(snapshot: &StateSnapshot) -> Vec<SerialInventory> {
    let status_filter = snapshot.ui.filters.serial_status;
    let term = snapshot.ui.search_terms.serials.to_lowercase();

    snapshot
        .serials
        .iter()
        .filter(|serial| status_filter.map_or(true, |status| serial.status == status))
        .filter(|serial| {
            term.is_empty() || serial.serial_number.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
