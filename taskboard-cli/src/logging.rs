//! Tracing setup for the binary

use tracing_subscriber::EnvFilter;

/// Pick the log filter: `--debug` wins, then `RUST_LOG`, then the configured level.
pub fn filter(debug: bool, configured: &str) -> EnvFilter {
    if debug {
        EnvFilter::new("taskboard=debug,taskboard_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    }
}

/// Install the global subscriber, writing to stderr so stdout stays parseable
pub fn init(debug: bool, configured: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug, configured))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
