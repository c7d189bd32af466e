//! Helpers shared by the integration tests.

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a `tracing` subscriber reading `RUST_LOG`, once per test binary.
///
/// `RUST_LOG=lawful::performance=debug` shows which instances fall back to
/// default Foldable bodies.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
