//! Serial-number creation helpers: bulk range generation and line-based
//! import. Both produce unassigned [`SerialInventory`] records ready for
//! `SerialStore::add_serials`.

use crate::errors::StoreError;
use crate::models::SerialInventory;

/// Largest number of serials a single range generation may produce.
pub const MAX_RANGE_SIZE: u32 = 1000;

/// Generates `{prefix}{n}` serials for the inclusive range
/// `start..=end`, with `n` zero-padded to three digits.
pub fn generate_serial_range(
    prefix: &str,
    start: u32,
    end: u32,
    supplier_id: &str,
    buyer_id: &str,
    part_number_id: &str,
    created_by: &str,
) -> Result<Vec<SerialInventory>, StoreError> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(StoreError::Validation(
            "serial prefix must not be empty".to_string(),
        ));
    }
    if start > end {
        return Err(StoreError::Validation(format!(
            "invalid serial range: start {start} is after end {end}"
        )));
    }
    if end - start > MAX_RANGE_SIZE {
        return Err(StoreError::Validation(format!(
            "serial range too large: at most {MAX_RANGE_SIZE} serials may be generated at once"
        )));
    }

    Ok((start..=end)
        .map(|n| {
            SerialInventory::new(
                supplier_id,
                buyer_id,
                part_number_id,
                format!("{prefix}{n:03}"),
                created_by,
            )
        })
        .collect())
}

/// Parses one serial number per line, trimming whitespace and skipping
/// empty lines.
pub fn parse_serial_lines(
    input: &str,
    supplier_id: &str,
    buyer_id: &str,
    part_number_id: &str,
    created_by: &str,
) -> Vec<SerialInventory> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|serial_number| {
            SerialInventory::new(
                supplier_id,
                buyer_id,
                part_number_id,
                serial_number,
                created_by,
            )
        })
        .collect()
}
