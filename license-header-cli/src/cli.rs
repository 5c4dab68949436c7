//! Argument parsing and command execution.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use license_header::{
    DEFAULT_SCAN_LINES, FsSourceConfig, InjectConfig, InjectionReport, RunMode, ensure_fs, output,
};

/// Ensure source files carry the required license header.
///
/// By default, files missing the header are fixed in place. With `--check`,
/// nothing is written and missing headers fail the run — suitable for CI.
#[derive(Parser, Debug)]
#[command(name = "license-header", version, about)]
pub struct Args {
    /// Paths to process (files or directories)
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Report missing headers without modifying files; exit 1 when any are missing
    #[arg(long)]
    pub check: bool,

    /// Exclude glob pattern (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Maximum number of lines scanned for an existing header
    #[arg(long = "max-lines", value_name = "N", default_value_t = DEFAULT_SCAN_LINES)]
    pub max_lines: usize,

    /// Follow symbolic links during directory traversal
    #[arg(long)]
    pub follow_links: bool,

    /// Emit the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments from the environment and execute.
///
/// # Errors
///
/// Returns an error on invalid paths or output failures; argument errors
/// exit via clap.
pub fn run() -> Result<i32> {
    let args = Args::parse();
    crate::logging::init(args.verbose);
    run_with(&args, &mut std::io::stdout())
}

/// Execute with already-parsed arguments, writing the report to `out`.
///
/// Returns the process exit code: 0 for a clean run, 1 when headers are
/// missing (check mode) or any file could not be processed.
///
/// # Errors
///
/// Returns an error if the paths are invalid or the report cannot be written.
pub fn run_with(args: &Args, out: &mut dyn Write) -> Result<i32> {
    let mut fs_config = FsSourceConfig::default();
    fs_config.paths = args.paths.clone();
    fs_config.exclude = args.exclude.clone();
    fs_config.follow_links = args.follow_links;

    let mut inject_config = InjectConfig::default();
    inject_config.scan_limit = args.max_lines;
    inject_config.mode = if args.check {
        RunMode::Check
    } else {
        RunMode::Fix
    };

    tracing::debug!(
        paths = fs_config.paths.len(),
        excludes = fs_config.exclude.len(),
        scan_limit = inject_config.scan_limit,
        check = args.check,
        "resolved run configuration"
    );

    let report = ensure_fs(&fs_config, &inject_config)?;

    tracing::info!(
        scanned = report.scanned_files,
        failed = report.failed_files,
        missing = report.missing_count(),
        modified = report.modified_count(),
        ok = report.ok,
        "run finished"
    );

    if args.json {
        output::write_json(&report, out)?;
    } else {
        output::write_human(&report, out)?;
        print_verdict(&report);
    }

    Ok(i32::from(!report.ok))
}

/// One colored verdict line on stderr; the report itself stays ANSI-free.
fn print_verdict(report: &InjectionReport) {
    if report.ok {
        if report.modified.is_empty() {
            eprintln!("{}", "license headers: OK".green().bold());
        } else {
            eprintln!(
                "{}",
                format!("license headers: {} file(s) fixed", report.modified_count())
                    .green()
                    .bold()
            );
        }
    } else {
        eprintln!(
            "{}",
            format!(
                "license headers: {} missing, {} failed",
                report.missing_count(),
                report.failed_files
            )
            .red()
            .bold()
        );
    }
}
