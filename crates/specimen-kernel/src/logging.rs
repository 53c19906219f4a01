//! Tracing subscriber setup
//!
//! The kernel only emits `tracing` events. Binaries and test suites that want
//! to see them call [`init_tracing`] once; later calls are no-ops.

use crate::config::GraphConfig;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber
///
/// `RUST_LOG` wins over `default_filter` when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Install a global fmt subscriber using `config.log_filter`
pub fn init_from_config(config: &GraphConfig) -> bool {
    init_tracing(&config.log_filter)
}
