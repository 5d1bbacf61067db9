use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber on stderr so stdout carries only results.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `info` when `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
