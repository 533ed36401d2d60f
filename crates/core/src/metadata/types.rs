//! Metadata snapshot types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Approximate dataset summary computed from a bounded prefix.
///
/// Everything except `total_rows` is derived from the sample only and is a
/// preview, not a source of truth.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataSnapshot {
    /// Full, un-sampled row count.
    pub total_rows: usize,
    /// Rows actually inspected.
    pub sample_size: usize,
    /// Earliest and latest parseable dates within the sample.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Years seen in the sample, descending.
    pub available_years: Vec<i32>,
    /// Distinct locations seen in the sample, capped, in first-seen order.
    pub sample_locations: Vec<String>,
    /// Sum of parseable amounts in the sample, without sign correction.
    pub approx_revenue: Decimal,
    /// Count of `-R` invoices in the sample.
    pub approx_return_count: usize,
    /// Always true; this snapshot is an estimate by construction.
    pub approximate: bool,
}
