//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for an embedding process.
///
/// Respects `RUST_LOG`; defaults to `info` when unset. Panics if a global
/// subscriber is already installed — embedders that manage their own
/// subscriber should simply not call this.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Like [`init_tracing`] but tolerates an existing subscriber.
/// Useful in tests where multiple suites race to install one.
pub fn try_init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
