//! Logging initialization.
//!
//! Logs go to stderr so stdout stays clean for command output.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "docmask=debug,docmaskctl=debug";

/// Initialize logging (prefer RUST_LOG, fallback to the verbosity flag).
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(io::stderr);

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
