//! The metadata sampling pass.

use std::collections::BTreeSet;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::normalize::dates;
use crate::normalize::service::parse_amount;
use crate::normalize::{RETURN_MARKER, RawRow};

use super::types::MetadataSnapshot;

/// Maximum distinct locations reported.
pub const LOCATION_CAP: usize = 50;

/// Computes an approximate summary from the first `sample_size` raw rows.
///
/// Only the strict date pattern is tried (no lenient retry) and the revenue
/// estimate skips sign correction, to keep the pass cheap. `total_rows` is
/// the full row count regardless of the sample bound.
#[must_use]
pub fn sample_metadata(rows: &[RawRow], sample_size: usize) -> MetadataSnapshot {
    let sample = &rows[..rows.len().min(sample_size)];

    let mut min_date = None;
    let mut max_date = None;
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut locations: Vec<String> = Vec::new();
    let mut approx_revenue = Decimal::ZERO;
    let mut approx_return_count = 0usize;

    for row in sample {
        if let Some(date) = dates::parse_strict(&row.invoice_date) {
            years.insert(date.year());
            min_date = Some(min_date.map_or(date, |d: chrono::NaiveDate| d.min(date)));
            max_date = Some(max_date.map_or(date, |d: chrono::NaiveDate| d.max(date)));
        }

        if let Some(amount) = parse_amount(&row.net_revenue_amount) {
            approx_revenue += amount;
        }

        if row.invoice_number.contains(RETURN_MARKER) {
            approx_return_count += 1;
        }

        if locations.len() < LOCATION_CAP
            && !row.location.is_empty()
            && !locations.contains(&row.location)
        {
            locations.push(row.location.clone());
        }
    }

    MetadataSnapshot {
        total_rows: rows.len(),
        sample_size: sample.len(),
        date_range: min_date.zip(max_date),
        available_years: years.into_iter().rev().collect(),
        sample_locations: locations,
        approx_revenue,
        approx_return_count,
        approximate: true,
    }
}
