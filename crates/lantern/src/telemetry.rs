//! Log output for the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a `tracing` subscriber filtered by `LOG_LEVEL` (default `info`).
///
/// `pretty` selects the multi-line formatter. Does nothing if a subscriber is
/// already installed.
pub fn init_telemetry(pretty: bool) {
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if pretty {
        fmt::layer().pretty().boxed()
    } else {
        fmt::layer().boxed()
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
