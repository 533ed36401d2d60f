//! Process-wide source configuration.
//!
//! The remote URL is the only shared mutable state in the system. Reads
//! take a snapshot copy; writes happen only through `commit`, after the
//! caller has validated the candidate configuration outside the lock.
//! Readers therefore see either the old value or the new value, never a
//! torn state, and a validation fetch in flight never blocks them.

use std::path::PathBuf;
use std::sync::RwLock;
use std::time::Duration;

use crate::source::SourceDescriptor;

/// Holder for the active source configuration.
#[derive(Debug)]
pub struct SourceStore {
    remote_url: RwLock<Option<String>>,
    local_path: PathBuf,
    fetch_timeout: Duration,
}

impl SourceStore {
    /// Creates a store with the boot-time remote URL (possibly absent).
    #[must_use]
    pub fn new(
        remote_url: Option<String>,
        local_path: PathBuf,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            remote_url: RwLock::new(remote_url),
            local_path,
            fetch_timeout,
        }
    }

    /// Returns a snapshot descriptor for one request.
    #[must_use]
    pub fn snapshot(&self) -> SourceDescriptor {
        let remote_url = self
            .remote_url
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        SourceDescriptor {
            remote_url,
            local_path: self.local_path.clone(),
            fetch_timeout: self.fetch_timeout,
        }
    }

    /// Builds the descriptor a candidate remote URL would produce, without
    /// touching the active configuration. Used for the validation fetch.
    #[must_use]
    pub fn candidate(&self, remote_url: Option<String>) -> SourceDescriptor {
        SourceDescriptor {
            remote_url,
            local_path: self.local_path.clone(),
            fetch_timeout: self.fetch_timeout,
        }
    }

    /// Swaps in a validated remote URL (or clears it).
    pub fn commit(&self, remote_url: Option<String>) {
        *self
            .remote_url
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = remote_url;
    }

    /// Whether the local fallback file currently exists.
    #[must_use]
    pub fn local_file_exists(&self) -> bool {
        self.local_path.exists()
    }

    /// Label describing which source a resolve would use right now.
    #[must_use]
    pub fn data_source_label(&self) -> &'static str {
        if self.snapshot().remote_url.is_some() {
            "remote"
        } else if self.local_file_exists() {
            "local file"
        } else {
            "none"
        }
    }
}
