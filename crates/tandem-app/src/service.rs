// Rust guideline compliant 2026-02-09

//! Task CRUD service.
//!
//! Every update follows the same order: the task must exist, then a status
//! change must pass the transition table, then the remaining fields must
//! validate, and only then is anything written. A failed check leaves the
//! stored task untouched.
//!
//! The service takes `&mut self` for mutations, so one owner sees an atomic
//! read-validate-write. Share it across threads behind a `Mutex`.

use crate::error::{AppError, Result};
use crate::fsm::check_status_change;
use crate::ids::{find_task, resolve_task_id};
use crate::list::{list_tasks, ListOptions};
use crate::store::{MemoryStore, TaskStore};
use crate::time::unix_timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use tandem_core::models::validate_title;
use tandem_core::{identity, Config, Error as CoreError, Task, TaskStatus};
use tracing::{debug, info};

/// Fields accepted when creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial status; `Created` when omitted.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl NewTask {
    /// Creates a request with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update. `None` leaves a field as it is.
///
/// `description` distinguishes an absent field (`None`) from an explicit
/// `null` (`Some(None)`), which clears the stored description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description, or `Some(None)` to clear it.
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    /// Requested status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Maps any present value, `null` included, to `Some`.
fn present_field<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl TaskPatch {
    /// Creates a patch that only requests a status change.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Task service over a [`TaskStore`].
#[derive(Debug)]
pub struct TaskService<S = MemoryStore> {
    store: S,
    config: Config,
}

impl TaskService<MemoryStore> {
    /// Creates a service over an empty in-memory store.
    #[must_use]
    pub fn in_memory(config: Config) -> Self {
        Self::new(MemoryStore::new(), config)
    }
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or too long.
    pub fn create_task(&mut self, new: NewTask) -> Result<Task> {
        validate_title(&new.title, self.config.max_title_len)?;

        let now = unix_timestamp();
        let mut nonce = 0u32;
        let id = loop {
            let id = identity::generate_id(&new.title, now, nonce);
            if !self.store.contains(&id) {
                break id;
            }
            nonce = nonce.saturating_add(1);
        };

        let task = Task {
            id,
            title: new.title,
            description: new.description,
            status: new.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        task.validate(self.config.max_title_len)?;
        self.store.insert(task.clone())?;

        info!(task = %task.id, status = %task.status, "created task");
        Ok(task)
    }

    /// Fetches a task by full or partial ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `AmbiguousId` from ID resolution.
    pub fn get_task(&self, id: &str) -> Result<Task> {
        find_task(id, &self.store)
    }

    /// Lists one page of tasks in creation order.
    #[must_use]
    pub fn list_tasks(&self, options: &ListOptions) -> Vec<Task> {
        list_tasks(self.store.all(), options, self.config.default_page_limit)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns an error, without writing anything, if:
    /// - The task does not exist (checked before anything else)
    /// - The requested status is not reachable from the current one
    /// - The new title is empty or too long
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<Task> {
        let mut task = self.get_task(id)?;
        let mut changed = false;

        if let Some(requested) = patch.status {
            if check_status_change(&task, requested, self.config.self_transition)? {
                task.status = requested;
                changed = true;
            }
        }

        if let Some(title) = patch.title {
            validate_title(&title, self.config.max_title_len)?;
            changed |= task.title != title;
            task.title = title;
        }

        if let Some(description) = patch.description {
            changed |= task.description != description;
            task.description = description;
        }

        if !changed {
            debug!(task = %task.id, "update left task unchanged");
            return Ok(task);
        }

        task.updated_at = unix_timestamp();
        self.store.replace(task.clone())?;

        info!(task = %task.id, status = %task.status, "updated task");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the task does not exist.
    pub fn delete_task(&mut self, id: &str) -> Result<()> {
        let full_id = resolve_task_id(id, &self.store)?;
        self.store
            .remove(&full_id)
            .ok_or_else(|| AppError::from(CoreError::EntityNotFound(id.to_string())))?;

        info!(task = %full_id, "deleted task");
        Ok(())
    }
}
