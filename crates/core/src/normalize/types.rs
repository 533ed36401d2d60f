//! Normalization data types.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of source data before normalization.
///
/// The five required columns are typed members, validated once at parse
/// time; anything else the provider sends lands in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Invoice number text (`INVOICENUMBER`).
    pub invoice_number: String,
    /// Free-text invoice date (`INVOICEDATE`).
    pub invoice_date: String,
    /// Net revenue amount as text (`NETREVENUEAMOUNT`).
    pub net_revenue_amount: String,
    /// Pharmacist name (`PHARMACISTNAME`).
    pub pharmacist: String,
    /// Location name (`LOCATIONNAME`).
    pub location: String,
    /// Unrecognized columns, keyed by header name.
    pub extra: HashMap<String, String>,
}

/// A canonical, normalized invoice line.
///
/// Immutable after construction. Every retained transaction has a valid
/// `date` and a finite `net_revenue_amount` within the plausibility range;
/// the return sign has already been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Invoice number; may contain the `-R` return marker.
    pub invoice_number: String,
    /// Original unparsed date text, retained for diagnostics.
    pub invoice_date: String,
    /// Parsed calendar date.
    pub date: NaiveDate,
    /// Year derived from `date`.
    pub year: i32,
    /// Month derived from `date` (1-12).
    pub month: u32,
    /// Net revenue, sign-corrected for returns.
    pub net_revenue_amount: Decimal,
    /// Pharmacist name.
    pub pharmacist: String,
    /// Location name.
    pub location: String,
}

/// Why a raw row was excluded from the normalized set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The date text failed both the strict and the lenient parse.
    UnparseableDate,
    /// The amount text is not a finite decimal.
    UnparseableAmount,
    /// The amount lies outside the plausibility range.
    OutOfRange,
}

/// Per-stage drop counters for one normalization run.
///
/// Exposed for operability; losing some rows to bad dates is expected, not
/// exceptional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    /// Raw rows fed into the normalizer.
    pub input_rows: usize,
    /// Rows dropped because the date failed both parse tiers.
    pub date_failures: usize,
    /// Rows dropped because the amount was not numeric.
    pub amount_failures: usize,
    /// Rows dropped by the plausibility range check.
    pub range_rejects: usize,
}

impl NormalizeStats {
    /// Total rows dropped across all stages.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.date_failures + self.amount_failures + self.range_rejects
    }

    /// Rows that survived normalization.
    #[must_use]
    pub const fn retained(&self) -> usize {
        self.input_rows - self.dropped()
    }

    pub(crate) fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::UnparseableDate => self.date_failures += 1,
            DropReason::UnparseableAmount => self.amount_failures += 1,
            DropReason::OutOfRange => self.range_rejects += 1,
        }
    }
}

/// Result of one normalization run: the clean transactions plus the drop
/// counters accumulated while producing them.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    /// Normalized transactions, in source order.
    pub transactions: Vec<Transaction>,
    /// Per-stage drop counters.
    pub stats: NormalizeStats,
}
