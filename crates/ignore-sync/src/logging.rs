//! Subscriber setup for the process that drives sync and check runs.
//!
//! The library crates only emit `tracing` events. A binary or task runner
//! embedding them calls [`init`] once at startup to print those events;
//! callers that install their own subscriber skip it.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for sync and check runs.
///
/// Uses the `RUST_LOG` environment variable to pick the log level,
/// defaulting to "info" if not set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
