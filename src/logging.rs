//! Opt-in tracing initialization for binaries and examples embedding the
//! store. Library code only emits through `tracing` macros and never
//! installs a subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber honoring `RUST_LOG`, defaulting to
/// `info`. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
