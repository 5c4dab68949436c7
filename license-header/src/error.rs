//! Error and finding types for the injection pipeline.

use std::path::PathBuf;

use serde::Serialize;

use crate::family::SyntaxFamily;

/// The kind of scan-level failure that prevented a file from being processed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8; binary content never reaches
    /// the injector.
    InvalidEncoding,
    /// The resolved path is outside the scan root (symlink escape).
    OutsideRoot,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached,
    /// truncating the run.
    LimitExceeded,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
    /// The injected content could not be written back to the file.
    WriteError,
}

/// A scan-level error: a file that could not be processed at all.
///
/// These are distinct from [`MissingHeader`] (a file that was read fine and
/// simply lacks the header). A `ScanError` means the run did not fully cover
/// the tree — CI must treat these as failures.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be processed. For
    /// [`ScanErrorKind::InvalidExcludePattern`] this carries the offending
    /// pattern instead of a path.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

/// A file that lacks the attribution header (check-mode finding).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct MissingHeader {
    /// The file missing the header.
    pub file: PathBuf,
    /// The syntax family whose template would be injected.
    pub family: SyntaxFamily,
}

impl MissingHeader {
    /// Format the finding for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!(
            "{}: missing license header ({} template)",
            self.file.display(),
            self.family
        )
    }
}
