//! Fast approximate dataset summary.
//!
//! The sampler trades accuracy for latency: it inspects only a bounded
//! prefix of the raw rows under a lightweight variant of normalization.
//! Callers needing exact totals must use the aggregator over the fully
//! normalized set.

pub mod service;
pub mod types;


pub use service::{LOCATION_CAP, sample_metadata};
pub use types::MetadataSnapshot;
