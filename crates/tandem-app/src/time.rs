// Rust guideline compliant 2026-02-09

//! Timestamp helpers for Tandem.

use chrono::Utc;

/// Returns the current Unix timestamp in seconds.
#[must_use]
pub fn unix_timestamp() -> i64 {
    Utc::now().timestamp()
}
