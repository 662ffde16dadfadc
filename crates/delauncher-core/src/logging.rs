//! Structured JSON logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber on stderr.
///
/// `quiet` disables all output so stdout stays pipeable and stderr stays
/// empty. Otherwise `RUST_LOG` is honored, falling back to `info`.
/// Calling this more than once is a no-op.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
