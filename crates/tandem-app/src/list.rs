// Rust guideline compliant 2026-02-09

//! Listing and pagination helpers for tasks.

use crate::error::{AppError, Result};
use rayon::prelude::*;
use tandem_core::{Task, TaskStatus};

/// List options for filtering and paginating tasks.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<TaskStatus>,
    /// Number of matching tasks to skip.
    pub skip: usize,
    /// Maximum number of tasks to return; the configured default when `None`.
    pub limit: Option<usize>,
}

/// Parses a status string into a `TaskStatus` value.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<TaskStatus> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid status: {}", value)))
}

/// Filters and paginates tasks, keeping creation order.
///
/// # Arguments
///
/// * `tasks` - Tasks to filter, in creation order
/// * `options` - List options
/// * `default_limit` - Page size used when `options.limit` is `None`
///
/// # Returns
///
/// At most one page of matching tasks.
pub fn list_tasks(tasks: Vec<Task>, options: &ListOptions, default_limit: usize) -> Vec<Task> {
    let limit = options.limit.unwrap_or(default_limit);
    apply_filters(tasks, options)
        .into_iter()
        .skip(options.skip)
        .take(limit)
        .collect()
}

fn apply_filters(tasks: Vec<Task>, options: &ListOptions) -> Vec<Task> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let Some(status) = options.status else {
        return tasks;
    };
    let predicate = |task: &Task| task.status == status;

    if tasks.len() >= PARALLEL_THRESHOLD {
        // Indexed parallel collect keeps the input order.
        tasks.into_par_iter().filter(|t| predicate(t)).collect()
    } else {
        tasks.into_iter().filter(predicate).collect()
    }
}
