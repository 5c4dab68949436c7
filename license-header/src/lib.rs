//! # license-header
//!
//! License header detection and injection for source files.
//!
//! This crate provides a clean separation between the **core injection
//! engine** (pure string functions: classify, detect, inject) and **input
//! strategies** (starting with filesystem scanning).
//!
//! Detection and injection share one literal attribution marker, so every
//! injected header is self-detecting and repeated runs are idempotent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use license_header::{ensure_fs, FsSourceConfig, InjectConfig, RunMode};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("src"), PathBuf::from("public")];
//! fs_config.exclude = vec!["*.min.js".to_owned()];
//!
//! let mut inject_config = InjectConfig::default();
//! inject_config.mode = RunMode::Check;
//!
//! let report = ensure_fs(&fs_config, &inject_config).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Headers missing: {}", report.missing_count());
//! println!("OK: {}", report.ok);
//! ```
//!
//! The pure core is also usable directly, without any I/O:
//!
//! ```rust
//! use std::path::Path;
//! use license_header::transform;
//!
//! let out = transform(Path::new("style.css"), "body { color: red; }");
//! assert!(out.starts_with("/*"));
//! ```

mod config;
mod error;
mod family;
mod inject;
pub mod output;
mod report;
mod strategy;
mod template;

pub use config::{FsSourceConfig, InjectConfig, RunMode};
pub use error::{MissingHeader, ScanError, ScanErrorKind};
pub use family::{SyntaxFamily, classify};
pub use inject::{
    DEFAULT_SCAN_LINES, has_marker, has_marker_within, inject, inject_within, transform,
};
pub use report::InjectionReport;
pub use template::{
    ATTRIBUTION_MARKER, MARKUP_HEADER, SCRIPT_HEADER, STYLE_SHEET_HEADER, header_for,
};

use std::borrow::Cow;

use strategy::fs::{ScanResult, find_files, read_file_bounded, write_file};

/// Ensure the license header exists in files on disk.
///
/// This is the primary public API. Files whose extension does not classify
/// to a known syntax family are never touched. In [`RunMode::Fix`] (default)
/// missing headers are written back in place; in [`RunMode::Check`] they are
/// only reported.
///
/// # Arguments
///
/// * `fs_config` - Filesystem-specific source options (paths, exclude, size limits)
/// * `inject_config` - Core injection config (scan bound, check/fix mode)
///
/// # Errors
///
/// Returns an error if `fs_config.paths` is empty or if any provided path
/// does not exist. Returns `Ok` with `scanned_files: 0` if paths exist but
/// contain no supported files. Per-file failures (unreadable, binary,
/// oversized, unwritable) are reported in `report.scan_errors` and never
/// silently discarded.
pub fn ensure_fs(
    fs_config: &FsSourceConfig,
    inject_config: &InjectConfig,
) -> anyhow::Result<InjectionReport> {
    if fs_config.paths.is_empty() {
        anyhow::bail!("No paths provided for header injection");
    }

    for path in &fs_config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (files, mut scan_errors) = find_files(fs_config);

    if files.is_empty() && scan_errors.is_empty() {
        return Ok(InjectionReport {
            scanned_files: 0,
            failed_files: 0,
            ok: true,
            missing: vec![],
            modified: vec![],
            scan_errors: vec![],
        });
    }

    let mut missing = Vec::new();
    let mut modified = Vec::new();
    let mut scanned_files: usize = 0;
    // Per-file discovery failures (walk errors, boundary violations) are
    // already in scan_errors from find_files. Count them as failed files
    // upfront; a malformed exclude glob is a config error, not a file.
    let mut failed_files: usize = scan_errors
        .iter()
        .filter(|e| e.kind != ScanErrorKind::InvalidExcludePattern)
        .count();
    let mut total_bytes: u64 = 0;

    for file_path in &files {
        if scanned_files + failed_files >= fs_config.max_files {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Run aborted: max_files limit ({}) reached; remaining files not processed",
                    fs_config.max_files
                ),
            });
            failed_files += 1;
            break;
        }

        let content = match read_file_bounded(file_path, fs_config.max_file_size) {
            ScanResult::Ok(c) => c,
            ScanResult::Err(e) => {
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > fs_config.max_total_bytes {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Run aborted: max_total_bytes limit ({}) reached; remaining files not processed",
                    fs_config.max_total_bytes
                ),
            });
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        // find_files only returns classifiable paths.
        let Some(family) = classify(file_path) else {
            continue;
        };

        let mut file_failed = false;
        match inject_within(&content, family, inject_config.scan_limit) {
            Cow::Borrowed(_) => {
                tracing::debug!(file = %file_path.display(), "header already present");
            }
            Cow::Owned(updated) => match inject_config.mode {
                RunMode::Check => {
                    tracing::debug!(file = %file_path.display(), %family, "missing header");
                    missing.push(MissingHeader {
                        file: file_path.clone(),
                        family,
                    });
                }
                RunMode::Fix => match write_file(file_path, &updated) {
                    Ok(()) => {
                        tracing::debug!(file = %file_path.display(), %family, "header injected");
                        modified.push(file_path.clone());
                    }
                    Err(e) => {
                        tracing::warn!(file = %file_path.display(), "write failed: {}", e.message);
                        scan_errors.push(e);
                        failed_files += 1;
                        file_failed = true;
                    }
                },
            },
        }
        if !file_failed {
            scanned_files += 1;
        }
    }

    let ok = missing.is_empty() && scan_errors.is_empty();
    Ok(InjectionReport {
        scanned_files,
        failed_files,
        ok,
        missing,
        modified,
        scan_errors,
    })
}
