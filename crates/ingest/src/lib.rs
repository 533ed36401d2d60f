//! Data access for Pharmadash.
//!
//! This crate owns everything between "a configured source" and "raw rows
//! in memory":
//! - `source` - share-link rewriting and remote-then-local byte resolution
//! - `parser` - structural CSV decoding with required-column validation
//! - `store` - the process-wide mutable source configuration

pub mod parser;
pub mod source;
pub mod store;

pub use parser::{REQUIRED_COLUMNS, parse};
pub use source::{SourceDescriptor, direct_download_url, resolve};
pub use store::SourceStore;
