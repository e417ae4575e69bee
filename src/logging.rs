// src/logging.rs
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Install the stderr subscriber. `RUST_LOG` wins over the CLI flags.
///
/// Repeated calls are ignored so the entry points stay callable from tests.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
