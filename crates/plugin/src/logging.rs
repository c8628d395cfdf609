//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "RMOD_LOG";

/// Install the global subscriber
///
/// `RMOD_LOG` wins over `default_filter`. Safe to call more than once; only
/// the first call installs anything.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
