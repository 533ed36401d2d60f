//! Query filter data types.

use std::collections::BTreeSet;

use crate::normalize::Transaction;

/// Caller-supplied filter predicates and pagination window.
///
/// An empty predicate set acts as a wildcard for that field. All three sets
/// empty is a refused bulk query, not a wildcard match; the unfiltered
/// export path exists for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Years to match.
    pub years: BTreeSet<i32>,
    /// Months (1-12) to match.
    pub months: BTreeSet<u32>,
    /// Location names to match.
    pub locations: BTreeSet<String>,
    /// Number of matches to skip.
    pub offset: usize,
    /// Maximum matches to return.
    pub limit: usize,
}

impl FilterSpec {
    /// True if no predicate set is populated.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.years.is_empty() && self.months.is_empty() && self.locations.is_empty()
    }

    /// Conjunctive predicate: each populated set must contain the
    /// transaction's value.
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        (self.years.is_empty() || self.years.contains(&tx.year))
            && (self.months.is_empty() || self.months.contains(&tx.month))
            && (self.locations.is_empty() || self.locations.contains(&tx.location))
    }
}

/// One page of filter matches plus the pre-pagination match count.
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    /// Matches at positions `[offset, offset + limit)` in filter-pass order.
    pub matches: Vec<Transaction>,
    /// Count of all matches before pagination.
    pub total: usize,
}

impl FilterResult {
    /// Whether more matches exist past this page.
    #[must_use]
    pub const fn has_more(&self, spec: &FilterSpec) -> bool {
        spec.offset + spec.limit < self.total
    }
}
