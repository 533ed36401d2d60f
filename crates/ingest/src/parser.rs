//! Structural CSV decoding.
//!
//! Purely structural: header and required columns are checked once, field
//! text is carried through untouched. Semantic validation (dates, amounts)
//! belongs to the normalizer.

use std::collections::HashMap;

use pharmadash_core::normalize::RawRow;
use pharmadash_shared::{AppError, AppResult};

/// Required source columns, named exactly as the upstream provider emits
/// them. Lookup is case-sensitive; this is a contract, not a preference.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "INVOICENUMBER",
    "INVOICEDATE",
    "NETREVENUEAMOUNT",
    "PHARMACISTNAME",
    "LOCATIONNAME",
];

/// Decodes raw bytes into raw rows.
///
/// Fails with `MalformedSource` if the bytes are not delimited tabular text
/// with a header row, or if any required column is absent.
pub fn parse(bytes: &[u8]) -> AppResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| AppError::MalformedSource(format!("unreadable header row: {e}")))?
        .clone();

    let mut column_index: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        column_index.entry(name).or_insert(idx);
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !column_index.contains_key(*col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MalformedSource(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let required_positions: Vec<usize> =
        REQUIRED_COLUMNS.iter().map(|col| column_index[col]).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::MalformedSource(format!("unreadable record: {e}")))?;

        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let mut extra = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            if !required_positions.contains(&idx) {
                extra.insert(name.to_string(), field(idx));
            }
        }

        rows.push(RawRow {
            invoice_number: field(required_positions[0]),
            invoice_date: field(required_positions[1]),
            net_revenue_amount: field(required_positions[2]),
            pharmacist: field(required_positions[3]),
            location: field(required_positions[4]),
            extra,
        });
    }

    Ok(rows)
}
