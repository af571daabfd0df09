//! Console diagnostics via `tracing`. Reports and summaries go to stdout;
//! log lines go to stderr so they never mix with piped output.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Honors `RUST_LOG`, defaulting to `info`.
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
