//! Aggregation data types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Mergeable partial aggregate: row count and amount sum.
///
/// Merging is associative and commutative, which makes partition-and-merge
/// aggregation safe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketPartial {
    /// Row count.
    pub count: u64,
    /// Arithmetic sum of net revenue within the group.
    pub sum: Decimal,
}

impl BucketPartial {
    /// Folds one amount into the partial.
    pub fn add(&mut self, amount: Decimal) {
        self.count += 1;
        self.sum += amount;
    }

    /// Merges another partial into this one.
    pub fn merge(&mut self, other: Self) {
        self.count += other.count;
        self.sum += other.sum;
    }

    /// Finalizes the partial into a bucket.
    ///
    /// Callers only finalize non-empty groups, so `count > 0` holds for
    /// every emitted bucket.
    #[must_use]
    pub fn finalize(self) -> AggregateBucket {
        let mean = if self.count == 0 {
            Decimal::ZERO
        } else {
            (self.sum / Decimal::from(self.count)).round_dp(2)
        };
        AggregateBucket {
            count: self.count,
            sum: self.sum,
            mean,
        }
    }
}

/// One emitted aggregate group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateBucket {
    /// Row count; always positive for an emitted bucket.
    pub count: u64,
    /// Net sum of revenue (returns are already negative).
    pub sum: Decimal,
    /// Arithmetic mean, `sum / count`, rounded to 2 decimal places.
    pub mean: Decimal,
}
