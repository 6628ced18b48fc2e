//! Scalar reference kernels.
//!
//! These serve as:
//! - the default path for short vectors when SIMD is not requested
//! - the per-row reductions behind `dot_product_all` / `half_squared_norm_all`
//! - reference implementations for testing the faster paths

use crate::Element;

/// Manhattan (L1) distance, one absolute difference per iteration.
///
/// Iterates over `query.len()` elements.
///
/// # Panics
///
/// Panics if `row` is shorter than `query`.
#[inline]
#[must_use]
pub fn manhattan_scalar<T: Element>(query: &[T], row: &[T]) -> T {
    let mut sum = T::ZERO;
    for (q, r) in query.iter().zip(&row[..query.len()]) {
        sum += (*q - *r).abs();
    }
    sum
}

/// Dot product, plain multiply-accumulate in index order.
#[inline]
#[must_use]
pub fn dot_product_scalar<T: Element>(query: &[T], row: &[T]) -> T {
    let mut dot = T::ZERO;
    for (q, d) in query.iter().zip(row) {
        dot += *q * *d;
    }
    dot
}

/// Half the squared L2 norm: `0.5 * Σ row[j]²`.
#[inline]
#[must_use]
pub fn half_squared_norm_scalar<T: Element>(row: &[T]) -> T {
    let mut norm = T::ZERO;
    for x in row {
        norm += *x * *x;
    }
    norm * T::HALF
}
