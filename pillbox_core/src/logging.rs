//! Logging infrastructure for Pillbox.
//!
//! Log output goes to stderr; stdout is reserved for the rendered list.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// `default_level` comes from `[logging] level` in the config file; a set
/// `RUST_LOG` takes precedence over it.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Debug-level subscriber routed through libtest's output capture.
/// Safe to call from every test; only the first call installs it.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
