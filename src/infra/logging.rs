//! Logging utilities
//!
//! Diagnostic output goes to stderr through `tracing`; stdout is reserved for
//! the JSON matrix.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "job_matrix=debug"
    } else {
        "job_matrix=warn"
    }
}

/// Initialize the global subscriber. `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
