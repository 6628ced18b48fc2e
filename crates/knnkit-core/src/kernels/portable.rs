//! Portable 4-lane Manhattan reduction.
//!
//! Same contract as the ISA kernels (chunk of 4, lane accumulators,
//! horizontal sum, scalar tail) expressed over plain arrays. Used on targets
//! without a dedicated kernel and as a cross-check in tests.

use super::tail::sum_abs_diff_remainder;
use crate::Element;

/// Manhattan distance over 4 lane accumulators.
///
/// # Panics
///
/// Panics if `row` is shorter than `query`.
#[inline]
#[must_use]
pub fn manhattan_portable<T: Element>(query: &[T], row: &[T]) -> T {
    let len = query.len();
    let chunks = len / 4;
    let mut lanes = [T::ZERO; 4];

    for (qa, rb) in query
        .chunks_exact(4)
        .zip(row[..chunks * 4].chunks_exact(4))
    {
        for (lane, (q, r)) in lanes.iter_mut().zip(qa.iter().zip(rb)) {
            *lane += (*q - *r).abs();
        }
    }

    let mut result = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);
    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(query, row, base, remainder, result);
    result
}
