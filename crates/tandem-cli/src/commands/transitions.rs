// Rust guideline compliant 2026-02-09

//! Implementation of the `tandem transitions` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use tandem_app::parse_status;
use tandem_core::TRANSITIONS;

/// Prints the transition table, or the outgoing edges of one status.
///
/// # Errors
///
/// Returns an error if the status filter is not a known status.
pub fn execute(status: Option<&str>, formatter: &dyn OutputFormatter) -> Result<()> {
    let filter = status.map(parse_status).transpose()?;
    let edges: Vec<_> = TRANSITIONS
        .edges()
        .filter(|(from, _)| filter.map_or(true, |status| *from == status))
        .collect();

    println!("{}", formatter.format_transitions(&edges));
    Ok(())
}
