// Rust guideline compliant 2026-02-06

//! Core data models for Tandem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default maximum title length, in characters.
pub const DEFAULT_MAX_TITLE_LEN: usize = 255;

/// Lifecycle stage of a task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task exists but work has not started.
    #[default]
    Created,
    /// Task is being worked on.
    InProgress,
    /// Task is done.
    Completed,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Created,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "created" => Ok(TaskStatus::Created),
            "in_progress" | "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(crate::Error::InvalidInput(format!(
                "Invalid status: {}",
                value
            ))),
        }
    }
}

/// A managed task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique hash-based identifier (format: tsk-XXXXXX).
    pub id: String,
    /// One-line summary of the task.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Current lifecycle status.
    #[serde(default)]
    pub status: TaskStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Task {
    /// Creates a new task in the `Created` status.
    ///
    /// # Arguments
    ///
    /// * `title` - The task title
    /// * `now` - Unix timestamp used for both creation and update times
    /// * `nonce` - Disambiguates IDs for identical titles created in the same second
    ///
    /// # Returns
    ///
    /// A new Task. The title is not validated here; call [`Task::validate`].
    pub fn new(title: String, now: i64, nonce: u32) -> Self {
        let id = crate::identity::generate_id(&title, now, nonce);

        Self {
            id,
            title,
            description: None,
            status: TaskStatus::Created,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates the task data.
    ///
    /// # Arguments
    ///
    /// * `max_title_len` - Maximum title length in characters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title is empty or only whitespace
    /// - Title is longer than `max_title_len` characters
    /// - ID format is invalid
    pub fn validate(&self, max_title_len: usize) -> crate::Result<()> {
        validate_title(&self.title, max_title_len)?;
        crate::identity::validate_id_format(&self.id)?;
        Ok(())
    }
}

/// Checks a title against the emptiness and length rules.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns `InvalidInput` if the title is blank or too long.
pub fn validate_title(title: &str, max_title_len: usize) -> crate::Result<()> {
    if title.trim().is_empty() {
        return Err(crate::Error::InvalidInput(
            "Title cannot be empty".to_string(),
        ));
    }

    let len = title.chars().count();
    if len > max_title_len {
        return Err(crate::Error::InvalidInput(format!(
            "Title must be at most {} characters, got {}",
            max_title_len, len
        )));
    }

    Ok(())
}
