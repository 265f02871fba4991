//! Test helpers shared by unit and integration tests.

use std::sync::Once;

#[cfg(any(test, feature = "tracing-subscriber"))]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests, honouring `RUST_LOG` and defaulting to `debug`.
/// Safe to call from every test; only the first call installs a subscriber.
#[cfg(any(test, feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(any(test, feature = "tracing-subscriber")))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}
