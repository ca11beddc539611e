//! Diagnostic logging setup
//!
//! Installs a `tracing` fmt subscriber writing to stderr, so stdout stays
//! clean for exports. `RUST_LOG` takes precedence over the default level.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive, by verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "roomsplit=debug"
    } else {
        "roomsplit=warn"
    }
}

/// Initialise the global subscriber; later calls are no-ops
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // Another subscriber may already be installed, e.g. by a test harness
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
