// Rust guideline compliant 2026-02-06

//! Tracing setup for the Tandem CLI.
//!
//! Log output always goes to stderr so stdout stays machine-readable.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "TANDEM_LOG";

/// Installs the global tracing subscriber.
///
/// # Arguments
/// * `verbosity` - Number of `-v` flags; 0 is warnings only
///
/// # Errors
///
/// Returns an error if `TANDEM_LOG` holds an unknown level.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match std::env::var(LOG_ENV) {
        Ok(value) => parse_log_level(&value)?,
        Err(_) => level_for_verbosity(verbosity),
    };

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be set when running inside tests.
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Maps a `-v` count to a level.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Parses a level name.
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info, debug or trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" | "warning" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level in {}: {}", LOG_ENV, other),
    }
}
