//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Diagnostics go to stderr so listings on
/// stdout stay clean; `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
