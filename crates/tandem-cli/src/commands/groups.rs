// Rust guideline compliant 2026-02-09

//! Implementation of the `tandem groups` command.
//!
//! Computes the minimum number of capacity-bounded groups for a list of
//! item weights read from flags or from two lines on stdin.

use crate::output::OutputFormatter;
use anyhow::{bail, Result};
use std::io::BufRead;
use tandem_core::{plan_groups, PairingInput};
use tracing::debug;

/// Solves a grouping problem and prints the result.
///
/// # Arguments
///
/// * `weights` - Weights given with `--weights`, empty when not given
/// * `limit` - Limit given with `--limit`
/// * `explain` - Whether to print the groups as well as the count
/// * `stdin` - Reader used when neither flag is given
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if:
/// - Only one of `--weights` and `--limit` is given (stdin is not read then)
/// - Either input line is missing or malformed
/// - A weight or the limit is negative
pub fn execute<R: BufRead>(
    weights: Vec<i64>,
    limit: Option<i64>,
    explain: bool,
    stdin: R,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let input = match (weights.is_empty(), limit) {
        (false, Some(limit)) => PairingInput { weights, limit },
        (true, Some(_)) => bail!("--limit requires --weights"),
        (false, None) => bail!("--weights requires --limit"),
        (true, None) => PairingInput::parse(stdin)?,
    };

    debug!(
        items = input.weights.len(),
        limit = input.limit,
        "solving grouping"
    );

    let output = if explain {
        let plan = plan_groups(&input.weights, input.limit)?;
        formatter.format_groups(plan.len(), Some(&plan))
    } else {
        formatter.format_groups(input.solve()?, None)
    };
    println!("{}", output);

    Ok(())
}
