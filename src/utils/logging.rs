//! Diagnostic logging.
//!
//! Everything goes to stderr so `apps:info --shell` output stays parseable.
//! The filter comes from `HEROKU_LOG`, then `RUST_LOG`, then the `-v` count.

use std::{io, sync::Once};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn create_env_filter(verbosity: u8) -> EnvFilter {
    let fallback = level_for_verbosity(verbosity);
    match std::env::var("HEROKU_LOG") {
        Ok(spec) => EnvFilter::try_new(&spec).unwrap_or_else(|_| EnvFilter::new(fallback)),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(io::stderr),
            )
            .with(create_env_filter(verbosity))
            .init();
    });
}

#[cfg(test)]
#[path = "../../tests/utils/logging.rs"]
mod tests;
