// Rust guideline compliant 2026-02-09

//! Task lookup by full or partial ID.

use crate::error::Result;
use crate::store::TaskStore;
use tandem_core::{identity, Error as CoreError, Task};
use tracing::trace;

/// Resolves a partial task ID against a store's contents.
///
/// An exact ID is looked up directly; anything else is matched by prefix
/// over every stored task.
///
/// # Errors
///
/// Returns an error if the partial ID is empty, ambiguous, or not found.
pub fn resolve_task_id<S: TaskStore + ?Sized>(partial: &str, store: &S) -> Result<String> {
    if store.contains(partial) {
        return Ok(partial.to_string());
    }
    let full_id = identity::resolve_partial_id(partial, &store.all())?;
    trace!(partial, full_id = %full_id, "resolved partial id");
    Ok(full_id)
}

/// Resolves a partial ID and returns the stored task.
///
/// # Errors
///
/// Returns `EntityNotFound` or `AmbiguousId` from resolution.
pub fn find_task<S: TaskStore + ?Sized>(partial: &str, store: &S) -> Result<Task> {
    let full_id = resolve_task_id(partial, store)?;
    store
        .get(&full_id)
        .ok_or_else(|| CoreError::EntityNotFound(partial.to_string()).into())
}
