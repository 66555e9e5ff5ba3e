// Rust guideline compliant 2026-02-06

//! Command implementations for the Tandem CLI.

pub mod check;
pub mod groups;
pub mod transitions;
