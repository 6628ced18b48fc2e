//! 4-wide manually unrolled Manhattan kernel.

use super::tail::sum_abs_diff_remainder;
use crate::Element;

/// Vectors longer than this use [`manhattan_unrolled`] when SIMD is off.
pub const UNROLL_THRESHOLD: usize = 128;

/// Manhattan distance with four independent absolute differences per
/// iteration and a 0-3 element scalar tail.
///
/// # Panics
///
/// Panics if `row` is shorter than `query`.
#[inline]
#[must_use]
pub fn manhattan_unrolled<T: Element>(query: &[T], row: &[T]) -> T {
    let len = query.len();
    let chunks = len / 4;
    let mut result = T::ZERO;

    for i in 0..chunks {
        let j = i * 4;
        result += (query[j] - row[j]).abs()
            + (query[j + 1] - row[j + 1]).abs()
            + (query[j + 2] - row[j + 2]).abs()
            + (query[j + 3] - row[j + 3]).abs();
    }

    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(query, row, base, remainder, result);
    result
}
