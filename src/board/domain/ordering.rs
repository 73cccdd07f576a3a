//! Splice-and-renumber helpers shared by task priorities and member order.
//!
//! An ordered list is a `Vec` of identifiers, first entry first. Moving an
//! entry removes it, splices it back at the clamped target index, and then
//! assigns ranks `0..len` by position.

use std::collections::HashMap;
use std::hash::Hash;

/// Converts a list position into a rank value.
pub(crate) fn rank(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

/// Clamps a requested index into `0..=len`.
pub(crate) fn clamp_index(index: u32, len: usize) -> usize {
    usize::try_from(index).map_or(len, |requested| requested.min(len))
}

/// Inserts `moved` at `index`, clamped so out-of-range targets land at an end.
pub(crate) fn splice<I>(mut ordered: Vec<I>, index: u32, moved: I) -> Vec<I> {
    let position = clamp_index(index, ordered.len());
    ordered.insert(position, moved);
    ordered
}

/// Maps each identifier to its position in `ordered`.
pub(crate) fn ranks<I>(ordered: &[I]) -> HashMap<&I, u32>
where
    I: Eq + Hash,
{
    ordered
        .iter()
        .enumerate()
        .map(|(position, id)| (id, rank(position)))
        .collect()
}
