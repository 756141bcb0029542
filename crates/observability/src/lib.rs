//! Tracing/logging setup shared by applications embedding the billing core.
//!
//! The core crates only emit `tracing` events; installing a subscriber is
//! the embedding process's job, and this is the one-call way to do it.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filter defaults to `info` and is overridable via `RUST_LOG`. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
