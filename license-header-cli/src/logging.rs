//! Tracing subscriber initialization for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbosity is driven by the `-v`
/// count (warn / info / debug). Logs go to stderr so `--json` output on
/// stdout stays machine-readable. Safe to call more than once — later
/// calls are no-ops.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("license_header={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
