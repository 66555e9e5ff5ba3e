// Rust guideline compliant 2026-02-06

//! Tandem Core Library
//!
//! This crate provides the foundational components for Tandem:
//! - Capacity-constrained minimum pairing (two-pointer greedy)
//! - Task status model and the fixed transition table
//! - Hash ID generation and resolution
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod pairing;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::{validate_transition, validate_transition_with, SelfTransitionPolicy, TRANSITIONS};
pub use models::{Task, TaskStatus};
pub use pairing::{min_groups, plan_groups, Group, PairingInput};
