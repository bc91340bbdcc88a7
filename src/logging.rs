//! Log subscriber setup for the binary.

use tracing::debug;

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// report and summary text. `RUST_LOG` overrides the flag-derived level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
