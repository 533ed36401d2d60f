//! The filter pass.

use crate::normalize::Transaction;

use super::types::{FilterResult, FilterSpec};

/// Applies `spec` over the normalized set without mutating it.
///
/// Matches keep normalizer order; `total` counts every match before the
/// pagination window is applied. A spec with all predicate sets empty
/// returns an empty result with `total == 0`.
#[must_use]
pub fn filter(transactions: &[Transaction], spec: &FilterSpec) -> FilterResult {
    if spec.is_unconstrained() {
        return FilterResult::default();
    }

    let mut total = 0usize;
    let mut matches = Vec::new();

    for tx in transactions {
        if !spec.matches(tx) {
            continue;
        }
        if total >= spec.offset && matches.len() < spec.limit {
            matches.push(tx.clone());
        }
        total += 1;
    }

    FilterResult { matches, total }
}
