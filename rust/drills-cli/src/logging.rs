//! Diagnostic logging setup.
//!
//! Reports go to stdout; log lines go to stderr so the two never mix.
//! `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
