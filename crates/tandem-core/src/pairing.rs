// Rust guideline compliant 2026-02-06

//! Capacity-constrained minimum pairing.
//!
//! Given item weights and a limit, computes the fewest groups of one or two
//! items such that every two-item group weighs at most the limit. The greedy
//! pairs the heaviest remaining item with the lightest one whenever they fit;
//! if they do not, nothing lighter would fit either, so the heaviest item
//! goes alone.
//!
//! Both entry points sort a private copy of the weights. The caller's slice
//! keeps its order.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// One group produced by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// An item that travels alone.
    Single(u64),
    /// Two items, lighter first, whose sum is within the limit.
    Pair(u64, u64),
}

impl Group {
    /// Total weight carried by the group.
    #[must_use]
    pub fn load(&self) -> u64 {
        match *self {
            Group::Single(weight) => weight,
            Group::Pair(light, heavy) => light.saturating_add(heavy),
        }
    }

    /// Number of items in the group (1 or 2).
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Group::Single(_) => 1,
            Group::Pair(_, _) => 2,
        }
    }
}

/// Computes the minimum number of groups for `weights` under `limit`.
///
/// # Arguments
///
/// * `weights` - Item weights, any order, may be empty
/// * `limit` - Maximum combined weight of a two-item group
///
/// # Returns
///
/// The group count. Empty input yields 0.
///
/// # Errors
///
/// Returns `InvalidInput` if any weight or the limit is negative.
pub fn min_groups(weights: &[i64], limit: i64) -> Result<usize> {
    let (sorted, limit) = prepare(weights, limit)?;
    Ok(count_sorted(&sorted, limit))
}

/// Runs the same greedy as [`min_groups`] and returns the groups themselves.
///
/// Groups are emitted heaviest-first, in the order the greedy closes them.
///
/// # Errors
///
/// Returns `InvalidInput` if any weight or the limit is negative.
pub fn plan_groups(weights: &[i64], limit: i64) -> Result<Vec<Group>> {
    let (sorted, limit) = prepare(weights, limit)?;
    Ok(plan_sorted(&sorted, limit))
}

/// Two-pointer count over weights already sorted ascending.
#[must_use]
pub fn count_sorted(sorted: &[u64], limit: u64) -> usize {
    let mut left = 0usize;
    // One past the heaviest unplaced item.
    let mut end = sorted.len();
    let mut count = 0usize;

    while left < end {
        let heavy = end - 1;
        if left < heavy && fits(sorted[left], sorted[heavy], limit) {
            left += 1;
        }
        end -= 1;
        count += 1;
    }

    count
}

fn plan_sorted(sorted: &[u64], limit: u64) -> Vec<Group> {
    let mut groups = Vec::with_capacity(sorted.len().div_ceil(2));
    let mut left = 0usize;
    let mut end = sorted.len();

    while left < end {
        let heavy = end - 1;
        if left < heavy && fits(sorted[left], sorted[heavy], limit) {
            groups.push(Group::Pair(sorted[left], sorted[heavy]));
            left += 1;
        } else {
            groups.push(Group::Single(sorted[heavy]));
        }
        end -= 1;
    }

    groups
}

fn fits(light: u64, heavy: u64, limit: u64) -> bool {
    light
        .checked_add(heavy)
        .is_some_and(|load| load <= limit)
}

fn prepare(weights: &[i64], limit: i64) -> Result<(Vec<u64>, u64)> {
    let limit = u64::try_from(limit)
        .map_err(|_| Error::InvalidInput(format!("Limit must be non-negative, got {}", limit)))?;

    let mut sorted = Vec::with_capacity(weights.len());
    for (index, &weight) in weights.iter().enumerate() {
        let weight = u64::try_from(weight).map_err(|_| {
            Error::InvalidInput(format!(
                "Weight at position {} must be non-negative, got {}",
                index, weight
            ))
        })?;
        sorted.push(weight);
    }
    sorted.sort_unstable();

    Ok((sorted, limit))
}

/// Parsed solver input in the two-line text format.
///
/// Line one holds whitespace-separated weights (possibly none); line two
/// holds the limit as a single integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingInput {
    /// Item weights in input order.
    pub weights: Vec<i64>,
    /// Capacity limit for a pair.
    pub limit: i64,
}

impl PairingInput {
    /// Reads and validates the two-line format.
    ///
    /// Lines after the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reader fails (`Io`)
    /// - Either line is missing
    /// - A token is not an integer or is negative
    /// - The limit line does not hold exactly one token
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let weights_line = lines
            .next()
            .ok_or_else(|| Error::InvalidInput("Missing weights line".to_string()))??;
        let limit_line = lines
            .next()
            .ok_or_else(|| Error::InvalidInput("Missing limit line".to_string()))??;

        let weights = parse_weights(&weights_line)?;
        let limit = parse_limit(&limit_line)?;

        Ok(Self { weights, limit })
    }

    /// Solves this input with [`min_groups`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative values.
    pub fn solve(&self) -> Result<usize> {
        min_groups(&self.weights, self.limit)
    }
}

/// Parses a whitespace-separated list of non-negative integers.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first bad token.
pub fn parse_weights(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| parse_non_negative(token, "weight"))
        .collect()
}

/// Parses a line that must hold exactly one non-negative integer.
///
/// # Errors
///
/// Returns `InvalidInput` if the line is empty, has extra tokens, or the
/// token is not a non-negative integer.
pub fn parse_limit(line: &str) -> Result<i64> {
    let mut tokens = line.split_whitespace();
    let token = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput("Limit line is empty".to_string()))?;
    if tokens.next().is_some() {
        return Err(Error::InvalidInput(format!(
            "Limit line must hold a single integer, got '{}'",
            line.trim()
        )));
    }
    parse_non_negative(token, "limit")
}

fn parse_non_negative(token: &str, what: &str) -> Result<i64> {
    let value: i64 = token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Invalid {}: '{}'", what, token)))?;
    if value < 0 {
        return Err(Error::InvalidInput(format!(
            "The {} must be non-negative, got {}",
            what, value
        )));
    }
    Ok(value)
}
