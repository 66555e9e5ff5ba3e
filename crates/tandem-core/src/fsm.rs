// Rust guideline compliant 2026-02-06

//! Finite State Machine module for task status transitions.
//!
//! The transition table is fixed at compile time:
//!
//! - Created → InProgress
//! - Created → Completed
//! - InProgress → Completed
//! - Completed → InProgress (reopen)
//!
//! No status lists itself as a successor. Whether an unchanged status is an
//! error or a no-op is decided by [`SelfTransitionPolicy`]; the plain
//! [`validate_transition`] rejects it.
//!
//! The table holds no interior mutability and is safe to read from any
//! thread. Callers that persist a validated status change must provide their
//! own read-validate-write atomicity around the check.

use crate::{Error, Result, TaskStatus};
use serde::{Deserialize, Serialize};

/// The process-wide transition table.
pub static TRANSITIONS: TransitionTable = TransitionTable::standard();

/// How to treat a request whose target equals the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfTransitionPolicy {
    /// Reject with `IllegalTransition`, exactly as the table says.
    Reject,
    /// Accept as a no-op.
    #[default]
    NoOp,
}

/// Immutable mapping from a status to the statuses directly reachable from it.
#[derive(Debug)]
pub struct TransitionTable {
    entries: [(TaskStatus, &'static [TaskStatus]); 3],
}

impl TransitionTable {
    /// Builds the standard task lifecycle table.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: [
                (
                    TaskStatus::Created,
                    &[TaskStatus::InProgress, TaskStatus::Completed],
                ),
                (TaskStatus::InProgress, &[TaskStatus::Completed]),
                (TaskStatus::Completed, &[TaskStatus::InProgress]),
            ],
        }
    }

    /// Returns the statuses directly reachable from `status`.
    #[must_use]
    pub fn successors(&self, status: TaskStatus) -> &'static [TaskStatus] {
        self.entries
            .iter()
            .find(|(from, _)| *from == status)
            .map(|(_, to)| *to)
            .unwrap_or(&[])
    }

    /// Returns true if `requested` is a listed successor of `current`.
    #[must_use]
    pub fn allows(&self, current: TaskStatus, requested: TaskStatus) -> bool {
        self.successors(current).contains(&requested)
    }

    /// Checks a transition strictly against the table.
    ///
    /// # Errors
    ///
    /// Returns `IllegalTransition` carrying both statuses when the move is
    /// not listed, including `current == requested`.
    pub fn validate(&self, current: TaskStatus, requested: TaskStatus) -> Result<()> {
        if self.allows(current, requested) {
            Ok(())
        } else {
            Err(Error::IllegalTransition { current, requested })
        }
    }

    /// Iterates over every `(from, to)` edge in lifecycle order.
    pub fn edges(&self) -> impl Iterator<Item = (TaskStatus, TaskStatus)> + '_ {
        self.entries
            .iter()
            .flat_map(|(from, to)| to.iter().map(move |target| (*from, *target)))
    }
}

impl TaskStatus {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Errors
    ///
    /// Returns `IllegalTransition` if the target is not a successor.
    pub fn can_transition_to(&self, target: TaskStatus) -> Result<()> {
        TRANSITIONS.validate(*self, target)
    }

    /// Returns the statuses directly reachable from this one.
    #[must_use]
    pub fn successors(&self) -> &'static [TaskStatus] {
        TRANSITIONS.successors(*self)
    }
}

/// Validates a requested status change against the transition table.
///
/// Self-transitions are rejected; see [`validate_transition_with`] for the
/// configurable variant.
///
/// # Errors
///
/// Returns `IllegalTransition` if `requested` is not reachable from `current`.
pub fn validate_transition(current: TaskStatus, requested: TaskStatus) -> Result<()> {
    TRANSITIONS.validate(current, requested)
}

/// Validates a requested status change, applying a self-transition policy first.
///
/// # Errors
///
/// Returns `IllegalTransition` if the move is not listed and is not an
/// accepted no-op.
pub fn validate_transition_with(
    current: TaskStatus,
    requested: TaskStatus,
    policy: SelfTransitionPolicy,
) -> Result<()> {
    if current == requested && policy == SelfTransitionPolicy::NoOp {
        return Ok(());
    }
    TRANSITIONS.validate(current, requested)
}
