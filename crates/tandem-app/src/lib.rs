// Rust guideline compliant 2026-02-09

//! Shared application services for Tandem.
//!
//! This crate wraps the core transition validator in a task CRUD service
//! with a pluggable store, ID resolution, listing, stable error codes, and
//! standardized response envelopes.

pub mod error;
pub mod fsm;
pub mod ids;
pub mod list;
pub mod response;
pub mod service;
pub mod store;
pub mod time;

pub use error::{AppError, ErrorCode, Result};
pub use fsm::check_status_change;
pub use ids::{find_task, resolve_task_id};
pub use list::{list_tasks, parse_status, ListOptions};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use service::{NewTask, TaskPatch, TaskService};
pub use store::{MemoryStore, TaskStore};
pub use time::unix_timestamp;
