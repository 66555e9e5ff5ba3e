// Rust guideline compliant 2026-02-09

//! Transition validation helpers for Tandem.

use crate::error::Result;
use tandem_core::{fsm, SelfTransitionPolicy, Task, TaskStatus};
use tracing::{debug, warn};

/// Validates a status change for a task.
///
/// # Arguments
///
/// * `task` - The task whose status would change
/// * `requested` - Desired status
/// * `policy` - How to treat an unchanged status
///
/// # Returns
///
/// `Ok(true)` if the status actually changes, `Ok(false)` for an accepted no-op.
///
/// # Errors
///
/// Returns an error if the transition is not allowed.
pub fn check_status_change(
    task: &Task,
    requested: TaskStatus,
    policy: SelfTransitionPolicy,
) -> Result<bool> {
    if let Err(err) = fsm::validate_transition_with(task.status, requested, policy) {
        warn!(task = %task.id, from = %task.status, to = %requested, "rejected status change");
        return Err(err.into());
    }

    let changed = task.status != requested;
    debug!(task = %task.id, from = %task.status, to = %requested, changed, "status change allowed");
    Ok(changed)
}
