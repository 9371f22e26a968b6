//! Diagnostics for OhMyConsole itself.
//!
//! The logger reports its own decisions (probe reads, debug gating) through
//! `tracing`. This is separate from the console lines it produces, so the
//! subscriber writes to stderr and stays silent unless `RUST_LOG` asks.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with OhMyConsole defaults.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG), `warn` when unset
/// - Compact format on stderr
pub fn init() {
    init_with_filter("warn");
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
