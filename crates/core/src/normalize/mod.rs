//! Ledger normalization.
//!
//! This module turns raw CSV rows into canonical transactions:
//! - Return-sign correction (`-R` invoices are negated)
//! - Two-tier date parsing (strict `DD/MM/YYYY`, then a lenient day-first
//!   fallback)
//! - Decimal coercion and range-based outlier rejection
//!
//! Normalization never fails outright; defective rows are dropped and
//! counted per stage.

pub mod dates;
pub mod service;
pub mod types;


pub use service::{AMOUNT_RANGE_LIMIT, RETURN_MARKER, normalize};
pub use types::{DropReason, NormalizeOutcome, NormalizeStats, RawRow, Transaction};
