//! Test tracing: subscriber setup shared by every test binary.

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber writing through the test harness.
///
/// Honours `RUST_LOG`, defaulting to `info`. Safe to call from every test;
/// only the first call in a process installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .compact()
        .try_init();
}
