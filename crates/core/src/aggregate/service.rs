//! Aggregation over arbitrary grouping keys.

use std::collections::BTreeMap;

use crate::normalize::Transaction;

use super::types::{AggregateBucket, BucketPartial};

/// Groups transactions by `key_fn` and emits count/sum/mean per group.
///
/// Empty groups are never emitted. The `BTreeMap` keeps output order
/// deterministic for serialization and tests.
pub fn aggregate<K, F>(transactions: &[Transaction], key_fn: F) -> BTreeMap<K, AggregateBucket>
where
    K: Ord,
    F: Fn(&Transaction) -> K,
{
    let mut partials: BTreeMap<K, BucketPartial> = BTreeMap::new();
    for tx in transactions {
        partials
            .entry(key_fn(tx))
            .or_default()
            .add(tx.net_revenue_amount);
    }

    partials
        .into_iter()
        .map(|(key, partial)| (key, partial.finalize()))
        .collect()
}

/// Aggregates by calendar year.
#[must_use]
pub fn by_year(transactions: &[Transaction]) -> BTreeMap<i32, AggregateBucket> {
    aggregate(transactions, |tx| tx.year)
}

/// Aggregates by (year, month).
#[must_use]
pub fn by_year_month(transactions: &[Transaction]) -> BTreeMap<(i32, u32), AggregateBucket> {
    aggregate(transactions, |tx| (tx.year, tx.month))
}

/// Aggregates by location name.
#[must_use]
pub fn by_location(transactions: &[Transaction]) -> BTreeMap<String, AggregateBucket> {
    aggregate(transactions, |tx| tx.location.clone())
}
