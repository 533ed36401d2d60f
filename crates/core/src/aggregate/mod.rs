//! Grouped aggregation over normalized transactions.
//!
//! Buckets are built from mergeable (count, sum) partials, so splitting the
//! input into arbitrary partitions and merging the partials yields the same
//! buckets as a single pass.

pub mod service;
pub mod types;


pub use service::{aggregate, by_location, by_year, by_year_month};
pub use types::{AggregateBucket, BucketPartial};
