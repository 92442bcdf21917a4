use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so table and JSON output on stdout stay clean.
/// `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let default_filter = format!("pinger_sweep={level},pinger_sweep_engine={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::debug!(level, "Logging initialized");
}
