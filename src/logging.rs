//! Diagnostic logging.
//!
//! Never writes to stdout, which is reserved for the output line.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LEVEL: &str = "warn";

/// Build an `EnvFilter` from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging(filter: EnvFilter) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // Fails only if a global subscriber is already set.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_to_default() {
        let filter = env_filter(DEFAULT_LEVEL);
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(EnvFilter::new("off"));
        init_logging(EnvFilter::new("off"));
    }
}
