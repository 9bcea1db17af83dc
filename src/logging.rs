//! Diagnostic logging
//!
//! Installs a `tracing` subscriber that writes to stderr so command output on
//! stdout stays clean. The filter comes from `KAKEIBO_LOG` when set.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KAKEIBO_LOG";

static TRACING_INIT: Once = Once::new();

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "kakeibo=debug"
    } else {
        "kakeibo=warn"
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
