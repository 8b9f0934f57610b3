//! Sets up the tracing subscriber for the command line tools.

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence when it is set. Otherwise only this crate's
/// events at `level` or above are shown.
pub fn init_logging(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Log level set to {}", level.to_string().to_lowercase());
}
