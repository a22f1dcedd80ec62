//! Diagnostic logging for the client binary.
//!
//! Library code only emits `tracing` events. The binary decides whether to
//! install a subscriber; when it does, output goes to stderr so the
//! interactive prompts on stdout stay readable.

use std::str::FromStr;

use tracing::Level;

use crate::config::LoggingConfig;
use crate::errors::{AutholasError, AutholasResult};

/// Parse a configured level name (case-insensitive).
pub fn parse_level(level: &str) -> AutholasResult<Level> {
    Level::from_str(level.trim())
        .map_err(|_| AutholasError::ConfigError(format!("invalid log level '{level}'")))
}

/// Install the global `tracing` subscriber if logging is enabled.
///
/// Returns `Ok(false)` when logging is disabled and nothing was installed.
pub fn init_logging(config: &LoggingConfig) -> AutholasResult<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let level = parse_level(&config.level)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AutholasError::LoggingError(e.to_string()))?;

    Ok(true)
}
