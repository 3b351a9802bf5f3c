// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Maps a configured level name to a filter. Unknown names fall back to
/// `info` and are reported back so the caller can log them once logging runs.
#[must_use]
pub fn parse_level(level: &str) -> (LevelFilter, bool) {
    let normalized = level.trim().to_ascii_lowercase();
    if !LEVELS.contains(&normalized.as_str()) {
        return (LevelFilter::INFO, false);
    }
    match normalized.parse::<LevelFilter>() {
        Ok(filter) => (filter, true),
        Err(_) => (LevelFilter::INFO, false),
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `level`.
///
/// Calling it twice leaves the first subscriber in place.
pub fn init(level: &str) {
    let (default_level, recognized) = parse_level(level);

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .is_ok();

    if installed && !recognized {
        tracing::warn!(level, "invalid log level, defaulting to info");
    }
}
