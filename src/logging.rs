use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Initializes the `tracing` logging framework for usage in tests.
///
/// Output is filtered by the
/// [`RUST_LOG`](tracing_subscriber::filter::EnvFilter) environment variable
/// and defaults to `INFO`. Failed status checks are logged at `DEBUG`, so run
/// with `RUST_LOG=resource_test_matchers=debug` to see them.
///
/// Calling this function more than once is harmless.
pub fn init_for_test() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .without_time()
        .with_test_writer()
        .try_init();
}
