//! Tracing initialisation.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `DERANGEMENT_LOG=debug`.
pub const LOG_ENV: &str = "DERANGEMENT_LOG";

/// Install the global subscriber, writing to stderr so stdout carries only the result line.
///
/// Falls back to `warn` when `DERANGEMENT_LOG` is unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
