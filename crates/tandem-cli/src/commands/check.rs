// Rust guideline compliant 2026-02-09

//! Implementation of the `tandem check` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use tandem_app::{parse_status, AppError, ErrorEnvelope};
use tandem_core::{validate_transition_with, Config, SelfTransitionPolicy};
use tracing::{debug, warn};

/// Checks whether a status change is allowed.
///
/// # Arguments
///
/// * `from` - Current status name
/// * `to` - Requested status name
/// * `allow_self` - Accept `from == to` regardless of configuration
/// * `config` - Loaded configuration
/// * `json` - Whether to print a JSON error envelope on rejection
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if either status is unknown or the change is not allowed.
pub fn execute(
    from: &str,
    to: &str,
    allow_self: bool,
    config: &Config,
    json: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let current = parse_status(from)?;
    let requested = parse_status(to)?;
    let policy = if allow_self {
        SelfTransitionPolicy::NoOp
    } else {
        config.self_transition
    };

    match validate_transition_with(current, requested, policy) {
        Ok(()) => {
            debug!(%current, %requested, ?policy, "transition allowed");
            println!("{}", formatter.format_transition_ok(current, requested));
            Ok(())
        }
        Err(error) => {
            warn!(%current, %requested, "transition rejected");
            let error = AppError::from(error);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorEnvelope::from_error(&error))?
                );
            }
            Err(error.into())
        }
    }
}
