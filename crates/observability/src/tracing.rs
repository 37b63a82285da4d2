//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tracelot_service=debug";

/// Initialize tracing for the process with the default filter.
///
/// `RUST_LOG` overrides the default. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initialize tracing with an explicit fallback filter.
///
/// JSON-formatted lines with timestamps; the service operations log at
/// the mutation boundary, so one successful mutation produces one line.
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
