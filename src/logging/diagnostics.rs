//! Diagnostics output for the crate itself
//!
//! logkeep reports its own activity (directory setup, new log files, evictions)
//! through `tracing`. This installs a stderr subscriber for binaries that want to
//! see it.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "logkeep=info";

/// Initialize the diagnostics subscriber
///
/// Honors `RUST_LOG`, falling back to `logkeep=info`. Returns false if a global
/// subscriber was already installed.
pub fn init_diagnostics() -> bool {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .is_ok()
}
