//! Logging setup for applications embedding keywordtree.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the host program, which may use [`init_logging`] for a sensible one.

use crate::config::LogConfig;
use crate::error::{KeywordTreeError, KeywordTreeResult};
use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when it is set.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LogConfig) -> KeywordTreeResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        KeywordTreeError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}
