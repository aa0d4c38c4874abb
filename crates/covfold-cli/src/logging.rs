//! Log subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level; `RUST_LOG` takes precedence
#[must_use]
pub fn default_directive(verbosity: Verbosity) -> String {
    let level = verbosity.log_level();
    format!("covfold={level},covfold_cli={level}")
}

/// Install the global fmt subscriber writing to stderr
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
