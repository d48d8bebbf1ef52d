// src/log.rs
use tracing::Level;

/// Install the stderr subscriber. INFO by default, DEBUG when `verbose`.
/// A second call is a no-op.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
