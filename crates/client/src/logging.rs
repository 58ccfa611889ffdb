//! Logging setup for the terminal.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber; `RUST_LOG` directives still apply.
pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
