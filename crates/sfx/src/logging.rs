use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SFX_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Diagnostics go to stderr so the progress line on stdout stays intact.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
