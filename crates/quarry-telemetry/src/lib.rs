//! Logging setup for Quarry
//!
//! Structured logging via the `tracing` ecosystem. Export pipelines
//! (metrics, distributed tracing) are deliberately absent.

/// Initialize the global tracing subscriber
///
/// The filter is taken from `RUST_LOG` when set, falling back to
/// `default_filter` otherwise.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
