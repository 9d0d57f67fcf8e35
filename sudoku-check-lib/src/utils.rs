//! Utility functions shared by the row and column checkers.

use crate::types::GRID_SIZE;
use std::collections::HashSet;

/// Check that a 9-value line contains no duplicates.
///
/// Scans left to right with a transient set of seen values and bails out
/// as soon as a value reappears, mirroring the per-line check contract.
/// The set is scoped to this single call and discarded on return.
///
/// # Arguments
///
/// * `values` - The 9 cells of one row or column
///
/// # Returns
///
/// `true` if all 9 values are distinct, `false` at the first repeat.
pub fn all_distinct(values: &[u8; GRID_SIZE]) -> bool {
    let mut seen = HashSet::with_capacity(GRID_SIZE);
    for &value in values {
        if !seen.insert(value) {
            return false;
        }
    }
    true
}
