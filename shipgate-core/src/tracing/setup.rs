//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the shipgate tracing/logging system.
///
/// Reads the `SHIPGATE_LOG` environment variable for per-subsystem log
/// levels. Format: `SHIPGATE_LOG=scanner=debug,checks=info`
///
/// Falls back to `shipgate=info` if `SHIPGATE_LOG` is not set or invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SHIPGATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("shipgate=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
