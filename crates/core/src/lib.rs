//! Core pipeline logic for Pharmadash.
//!
//! This crate contains the normalization and aggregation pipeline with ZERO
//! web or I/O dependencies. Every stage is a pure function of its input, so
//! any endpoint that runs the pipeline over the same raw rows produces
//! numerically identical totals.
//!
//! # Modules
//!
//! - `normalize` - Return-sign correction, date parsing, numeric sanitization
//! - `aggregate` - Grouped count/sum/mean over normalized transactions
//! - `query` - Predicate filtering and pagination
//! - `metadata` - Fast approximate dataset summary from a bounded prefix

pub mod aggregate;
pub mod metadata;
pub mod normalize;
pub mod query;
