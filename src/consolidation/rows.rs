//! Normalization of raw sheet rows into typed pallet entries

use crate::types::{RawRow, SourceId};

/// Column holding the approval status in Base1 and Base2
pub const STATUS_COLUMN: &str = "Status";
/// Column holding the pallet quantity in every source
pub const PALLET_COLUMN: &str = "Pallet";
/// Status value (compared case-insensitively) that lets a row count
pub const APPROVED_STATUS: &str = "aprovado";

/// A row reduced to what the consolidation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalletEntry {
    pub source: SourceId,
    pub date_key: String,
    pub pallets: u64,
}

/// Parse a pallet cell. Only plain ASCII digit strings count; anything else
/// (blank, signs, spaces, decimals, overflow) is zero.
pub fn parse_pallets(value: &str) -> u64 {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    value.parse().unwrap_or(0)
}

/// Whether a status cell marks the row as approved
pub fn is_approved(status: &str) -> bool {
    status.to_lowercase() == APPROVED_STATUS
}

/// Normalize one raw row according to its source's contract.
///
/// Returns `None` when the row must not contribute: unapproved rows in
/// approval-gated sources, and rows with an empty date.
pub fn normalize_row(source: SourceId, row: &RawRow) -> Option<PalletEntry> {
    let cell = |column: &str| row.get(column).map(String::as_str).unwrap_or("");

    if source.requires_approval() && !is_approved(cell(STATUS_COLUMN)) {
        return None;
    }

    let date_key = cell(source.date_column());
    if date_key.is_empty() {
        return None;
    }

    Some(PalletEntry {
        source,
        date_key: date_key.to_string(),
        pallets: parse_pallets(cell(PALLET_COLUMN)),
    })
}

/// Normalize every row of a source, dropping the ones that do not contribute
pub fn normalize_rows<'a>(
    source: SourceId,
    rows: &'a [RawRow],
) -> impl Iterator<Item = PalletEntry> + 'a {
    rows.iter().filter_map(move |row| normalize_row(source, row))
}
