//! Tracing/logging setup shared by binaries, tests and benchmarks.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}

/// Logging configuration.
pub mod config;

/// Subscriber construction (filters, formatters).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
