use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr so they never mix with the rendered page.
///
/// `RUST_LOG` wins over `LOG_LEVEL`; `default_level` applies when neither
/// is set.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
