//! Configuration types for header injection.
//!
//! Split into core injection config (universal) and source-specific config
//! (how content is discovered). This keeps the core API free of filesystem
//! concerns.

use std::path::PathBuf;

use crate::inject::DEFAULT_SCAN_LINES;

/// What to do with a file that lacks the attribution header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunMode {
    /// Write the header back to the file (default).
    #[default]
    Fix,
    /// Report the file as missing a header; never write.
    Check,
}

/// Core injection config — applies regardless of input source.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct InjectConfig {
    /// Maximum number of lines scanned for an existing marker
    /// (default: [`DEFAULT_SCAN_LINES`] = 100).
    pub scan_limit: usize,
    /// Whether missing headers are fixed in place or only reported.
    pub mode: RunMode,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LINES,
            mode: RunMode::default(),
        }
    }
}

/// Filesystem-specific source options.
///
/// NOTE: `paths` is required and must be non-empty. Default scan roots are
/// a CLI/wrapper concern, not baked into the library — keeps the crate
/// repo-layout-agnostic.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Paths to scan (files or directories). Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format).
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// repository root and rewriting files outside it, which is worse for a
    /// tool that writes content back than for a read-only scanner.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
    /// Maximum total number of files to process (default: `100_000`).
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 512 MB).
    pub max_total_bytes: u64,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}
