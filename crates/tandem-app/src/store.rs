// Rust guideline compliant 2026-02-09

//! Task storage seam.
//!
//! The service only talks to storage through [`TaskStore`]. Implementations
//! backed by a database must make the read-validate-write of an update
//! atomic themselves (a transaction or an optimistic version check); the
//! service holds `&mut` access and assumes nothing changes underneath it
//! between [`TaskStore::get`] and [`TaskStore::replace`].

use tandem_core::{Error, Result, Task};

/// Storage operations the task service needs.
pub trait TaskStore {
    /// Adds a new task. Fails if the ID is already taken.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on a duplicate ID.
    fn insert(&mut self, task: Task) -> Result<()>;

    /// Returns the task with exactly this ID.
    fn get(&self, id: &str) -> Option<Task>;

    /// Returns every task in creation order.
    fn all(&self) -> Vec<Task>;

    /// Overwrites an existing task with the same ID.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if no task has this ID.
    fn replace(&mut self, task: Task) -> Result<()>;

    /// Removes and returns the task with this ID.
    fn remove(&mut self, id: &str) -> Option<Task>;

    /// Returns true if a task with this ID exists.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// In-memory task store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskStore for MemoryStore {
    fn insert(&mut self, task: Task) -> Result<()> {
        if self.position(&task.id).is_some() {
            return Err(Error::InvalidInput(format!(
                "Task ID already exists: {}",
                task.id
            )));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Task> {
        self.position(id).map(|index| self.tasks[index].clone())
    }

    fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn replace(&mut self, task: Task) -> Result<()> {
        let index = self
            .position(&task.id)
            .ok_or_else(|| Error::EntityNotFound(task.id.clone()))?;
        self.tasks[index] = task;
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Option<Task> {
        self.position(id).map(|index| self.tasks.remove(index))
    }
}
