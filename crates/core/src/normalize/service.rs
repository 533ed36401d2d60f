//! The normalization fold.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::dates;
use super::types::{DropReason, NormalizeOutcome, NormalizeStats, RawRow, Transaction};

/// Substring marking a return (reversal) invoice.
pub const RETURN_MARKER: &str = "-R";

/// Plausibility bound for a single invoice line, in either direction.
/// Defensive bound against corrupt source data, not a business rule.
pub const AMOUNT_RANGE_LIMIT: i64 = 1_000_000;

/// Normalizes raw rows into canonical transactions.
///
/// Never fails; defective rows are dropped with a per-stage counter.
/// Output preserves source order so repeated runs over identical input are
/// byte-for-byte reproducible.
#[must_use]
pub fn normalize(rows: &[RawRow]) -> NormalizeOutcome {
    let mut stats = NormalizeStats {
        input_rows: rows.len(),
        ..NormalizeStats::default()
    };
    let mut transactions = Vec::with_capacity(rows.len());

    for row in rows {
        match normalize_row(row) {
            Ok(tx) => transactions.push(tx),
            Err(reason) => stats.record(reason),
        }
    }

    debug!(
        input = stats.input_rows,
        retained = stats.retained(),
        date_failures = stats.date_failures,
        amount_failures = stats.amount_failures,
        range_rejects = stats.range_rejects,
        "normalization complete"
    );

    // Losing a few rows to bad dates is expected; losing most of the file
    // means the source itself is suspect.
    if stats.input_rows > 0 && stats.dropped() * 2 > stats.input_rows {
        warn!(
            input = stats.input_rows,
            dropped = stats.dropped(),
            "dropped more than half of the source rows during normalization"
        );
    }

    NormalizeOutcome {
        transactions,
        stats,
    }
}

/// Normalizes one row, or reports why it was dropped.
fn normalize_row(row: &RawRow) -> Result<Transaction, DropReason> {
    let date =
        dates::parse_with_fallback(&row.invoice_date).ok_or(DropReason::UnparseableDate)?;

    let amount = parse_amount(&row.net_revenue_amount).ok_or(DropReason::UnparseableAmount)?;
    let amount = apply_return_sign(&row.invoice_number, amount);

    let limit = Decimal::from(AMOUNT_RANGE_LIMIT);
    if amount < -limit || amount > limit {
        return Err(DropReason::OutOfRange);
    }

    Ok(Transaction {
        invoice_number: row.invoice_number.clone(),
        invoice_date: row.invoice_date.clone(),
        date,
        year: date.year(),
        month: date.month(),
        net_revenue_amount: amount,
        pharmacist: row.pharmacist.clone(),
        location: row.location.clone(),
    })
}

/// Negates the amount for return invoices.
///
/// A pure function of the invoice number text alone; the flip is applied
/// exactly once, before any aggregation reads the amount.
#[must_use]
pub(crate) fn apply_return_sign(invoice_number: &str, amount: Decimal) -> Decimal {
    if invoice_number.contains(RETURN_MARKER) {
        -amount
    } else {
        amount
    }
}

/// Parses an amount field into a finite decimal.
pub(crate) fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Decimal>().ok()
}
