// File: src/logging.rs
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "HUMANIZE_LOG";

/// Installs a stderr subscriber. `HUMANIZE_LOG` wins over `fallback`.
/// Calling it twice is harmless; the second install is ignored.
pub fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
