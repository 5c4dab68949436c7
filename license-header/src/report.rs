//! Injection run report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{MissingHeader, ScanError};

/// Result of an injection run.
///
/// CI pipelines must check both `missing` and `scan_errors`. A non-empty
/// `scan_errors` means the run did not fully cover the tree — treat it as a
/// build failure regardless of `missing`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct InjectionReport {
    /// Number of files successfully read and checked.
    pub scanned_files: usize,
    /// Number of files that could not be processed (read/write failures).
    pub failed_files: usize,
    /// Whether the run is clean: no scan errors, and (in check mode) no
    /// missing headers.
    pub ok: bool,
    /// Files missing the header, reported in check mode. Empty in fix mode —
    /// those files appear in `modified` instead.
    pub missing: Vec<MissingHeader>,
    /// Files that received a header in fix mode.
    pub modified: Vec<PathBuf>,
    /// Scan-level errors: files that could not be read or written.
    pub scan_errors: Vec<ScanError>,
}

impl InjectionReport {
    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Number of files missing the header.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Number of files that received a header.
    #[must_use]
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }
}
