//! Tracing setup for garagectl.
//!
//! Logs go to stderr so `ask --json` output stays clean on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `garage_shared=debug`
pub const LOG_ENV: &str = "GARAGISTE_LOG";

/// Default level for a `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
