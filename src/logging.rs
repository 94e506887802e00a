//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence over `--log`; `--quiet` lowers the default to
//! errors only. Report output goes to stdout and is never mixed with logs.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter directive for the requested level.
#[must_use]
pub fn filter_directive(level: &str, quiet: bool) -> String {
    if quiet {
        "error".to_string()
    } else {
        level.trim().to_ascii_lowercase()
    }
}

fn build_filter(level: &str, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(level, quiet)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str, quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
