use tracing_subscriber::{EnvFilter, fmt};

/// install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. records go to stderr so
/// stdout carries nothing but the notes.
pub fn setup_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a subscriber may already be installed (tests, embedding); keep it
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    tracing::debug!("logging setup complete");
}
