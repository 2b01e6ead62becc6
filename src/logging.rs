//! Tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Picks the log filter: `RUST_LOG`, else `debug` when verbose, else `level`.
#[must_use]
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, level: &str) -> String {
    match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(directive) => directive.to_string(),
        None if verbose => "debug".to_string(),
        None => level.to_string(),
    }
}

/// Installs the global subscriber. Logs go to stderr so command output stays clean.
///
/// Calling this more than once is a no-op.
pub fn init(verbose: bool, level: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
