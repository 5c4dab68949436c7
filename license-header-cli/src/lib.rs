//! CLI for checking and injecting license headers in source files.
//!
//! Exposed as a library so the integration tests can drive `cli::run_with`
//! directly; the `license-header` binary is a thin wrapper around it.

// The CLI prints user-facing output to stdout/stderr by design.
#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod cli;
pub mod logging;
