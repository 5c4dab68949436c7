//! Shared output formatting for injection reports.
//!
//! Provides JSON and plain-text formatters for `InjectionReport`.
//! Color/terminal formatting is intentionally excluded from this core module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::InjectionReport;

/// Format an `InjectionReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &InjectionReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format an `InjectionReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &InjectionReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  LICENSE HEADER CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:   {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:    {}", report.failed_files)?;
    writeln!(writer, "  Headers missing: {}", report.missing_count())?;
    writeln!(writer, "  Headers added:   {}", report.modified_count())?;
    writeln!(writer)?;

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (files that could not be processed)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.missing.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  MISSING HEADERS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for finding in &report.missing {
            writeln!(writer, "{}", finding.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.modified.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  HEADERS ADDED")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for path in &report.modified {
            writeln!(writer, "{}: license header added", path.display())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        if report.modified.is_empty() {
            writeln!(
                writer,
                "\u{2713} All {} files carry the license header",
                report.scanned_files
            )?;
        } else {
            writeln!(
                writer,
                "\u{2713} Added the license header to {} of {} files",
                report.modified_count(),
                report.scanned_files
            )?;
        }
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be processed \u{2014} CI must treat this as a failure",
                report.failed_files
            )?;
        }
        if !report.missing.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) missing the license header",
                report.missing_count()
            )?;
            writeln!(writer)?;
            writeln!(writer, "  To fix: re-run without --check to inject headers")?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
