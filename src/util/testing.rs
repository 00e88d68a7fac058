//! Shared logging setup for unit and integration tests.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a global `tracing` subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `valkit=trace`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("valkit=trace"));

        let layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter);

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
        debug!("Test setup complete");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup_is_idempotent() {
        init_test_setup();
        init_test_setup();
    }
}
