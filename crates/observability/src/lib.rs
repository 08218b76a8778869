//! Tracing and logging setup shared by binaries and tests that embed the catalog.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left to
//! whoever owns the process.

pub mod config;
/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing from an explicit config.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}
