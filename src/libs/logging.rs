use crate::libs::messages::macros::is_debug_mode;
use crate::msg_debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "tasktime=debug";

/// Installs a `tracing` subscriber when debug output is requested.
///
/// Uses `RUST_LOG` as the filter when set, otherwise logs this crate at
/// `debug`. Without `TASKTIME_DEBUG`/`RUST_LOG` nothing is installed and the
/// `msg_*` macros print plain console output.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed, e.g. by a test harness.
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init() {
        msg_debug!(format!("tracing subscriber not installed: {}", e));
    }
}
