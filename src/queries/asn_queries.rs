use crate::models::{Asn, AsnSerialAssignment};
use crate::state::StateSnapshot;

/// ASNs matching the active status filter AND the active search term
/// (case-insensitive substring over the ASN number).
pub fn filtered_asns(snapshot: &StateSnapshot) -> Vec<Asn> {
    let status_filter = snapshot.ui.filters.asn_status;
    let term = snapshot.ui.search_terms.asns.to_lowercase();

    snapshot
        .asns
        .iter()
        .filter(|asn| status_filter.map_or(true, |status| asn.status == status))
        .filter(|asn| term.is_empty() || asn.asn_number.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Assignment list of one ASN; empty when the id is unknown.
pub fn assignments_by_asn(snapshot: &StateSnapshot, asn_id: &str) -> Vec<AsnSerialAssignment> {
    snapshot
        .find_asn(asn_id)
        .map(|asn| asn.serial_assignments.clone())
        .unwrap_or_default()
}

/// Every assignment referencing `serial_number`, across all ASNs, in ASN
/// insertion order.
pub fn assignments_by_serial(
    snapshot: &StateSnapshot,
    serial_number: &str,
) -> Vec<AsnSerialAssignment> {
    snapshot
        .asns
        .iter()
        .flat_map(|asn| {
            asn.serial_assignments
                .iter()
                .filter(|assignment| assignment.serial_number == serial_number)
                .cloned()
        })
        .collect()
}
