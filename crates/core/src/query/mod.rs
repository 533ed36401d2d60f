//! Predicate filtering and pagination over normalized transactions.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::filter;
pub use types::{FilterResult, FilterSpec};
