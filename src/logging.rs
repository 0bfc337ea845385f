//! Diagnostic logging to stderr.

use tracing::Level;

/// Install the global subscriber. WARN by default, DEBUG with `--verbose`.
/// Stdout carries only the password, so everything here goes to stderr.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
