// Rust guideline compliant 2026-02-06

//! Hash-based task identifiers.
//!
//! IDs have the form `tsk-` followed by 6 to 8 lowercase hex characters.
//! Callers may refer to a task by any unique prefix of its hash part.

use crate::{Error, Result, Task};
use sha2::{Digest, Sha256};

/// Prefix shared by every task ID.
pub const ID_PREFIX: &str = "tsk-";

const MIN_HASH_LEN: usize = 6;
const MAX_HASH_LEN: usize = 8;

/// Generates a task ID from its title, creation time and a nonce.
///
/// # Arguments
///
/// * `title` - Task title
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Collision-avoidance counter
///
/// # Returns
///
/// An ID of the form `tsk-XXXXXX`.
pub fn generate_id(title: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", ID_PREFIX, &hex[..MIN_HASH_LEN])
}

/// Validates that an ID matches `tsk-[0-9a-f]{6,8}`.
///
/// # Errors
///
/// Returns `InvalidInput` describing the first violated rule.
pub fn validate_id_format(id: &str) -> Result<()> {
    let hash = id.strip_prefix(ID_PREFIX).ok_or_else(|| {
        Error::InvalidInput(format!("ID must start with '{}': {}", ID_PREFIX, id))
    })?;

    if hash.len() < MIN_HASH_LEN || hash.len() > MAX_HASH_LEN {
        return Err(Error::InvalidInput(format!(
            "ID hash must be {}-{} characters: {}",
            MIN_HASH_LEN, MAX_HASH_LEN, id
        )));
    }

    if !hash
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(Error::InvalidInput(format!(
            "ID hash must be lowercase hexadecimal: {}",
            id
        )));
    }

    Ok(())
}

/// Resolves a full or partial ID against a set of tasks.
///
/// The `tsk-` prefix is optional in `partial`. An exact match wins over
/// prefix matches.
///
/// # Errors
///
/// Returns an error if:
/// - `partial` is empty or is only the `tsk-` prefix
/// - No task matches (`EntityNotFound`)
/// - More than one task matches (`AmbiguousId`)
pub fn resolve_partial_id(partial: &str, tasks: &[Task]) -> Result<String> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Err(Error::InvalidInput("ID cannot be empty".to_string()));
    }

    let needle = if needle.starts_with(ID_PREFIX) {
        needle
    } else {
        format!("{}{}", ID_PREFIX, needle)
    };
    if needle.len() == ID_PREFIX.len() {
        return Err(Error::InvalidInput(format!(
            "ID must include at least one hash character: {}",
            partial
        )));
    }

    if let Some(task) = tasks.iter().find(|task| task.id == needle) {
        return Ok(task.id.clone());
    }

    let matches: Vec<String> = tasks
        .iter()
        .filter(|task| task.id.starts_with(&needle))
        .map(|task| task.id.clone())
        .collect();

    match matches.len() {
        0 => Err(Error::EntityNotFound(partial.to_string())),
        1 => Ok(matches[0].clone()),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches)),
    }
}
