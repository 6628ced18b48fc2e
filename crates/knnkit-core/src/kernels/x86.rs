//! x86_64 Manhattan kernels.
//!
//! - f32: one SSE register per 4-element chunk (SSE is x86_64 baseline)
//! - f64: one AVX register per chunk when AVX is detected, else two SSE2 registers
//!
//! Absolute value is taken by clearing the sign bit (`andnot` with `-0.0`).

use super::tail::sum_abs_diff_remainder;

/// SSE f32 Manhattan distance.
///
/// Callers must pass slices of equal length.
#[cfg(target_arch = "x86_64")]
#[inline]
pub(crate) fn manhattan_sse_f32(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::x86_64::*;

    debug_assert_eq!(a.len(), b.len());
    let len = a.len();
    let chunks = len / 4;
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    // SAFETY: SSE is always available on x86_64. offset + 4 <= chunks * 4 <= len
    // for both slices, and _mm_loadu_ps tolerates unaligned addresses.
    // Reason: 4-lane subtract/abs/accumulate is the vector path itself.
    let mut result = unsafe {
        let sign_mask = _mm_set1_ps(-0.0);
        let mut acc = _mm_setzero_ps();
        for i in 0..chunks {
            let offset = i * 4;
            let va = _mm_loadu_ps(a_ptr.add(offset));
            let vb = _mm_loadu_ps(b_ptr.add(offset));
            let diff = _mm_sub_ps(va, vb);
            acc = _mm_add_ps(acc, _mm_andnot_ps(sign_mask, diff));
        }
        let mut lanes = [0.0_f32; 4];
        _mm_storeu_ps(lanes.as_mut_ptr(), acc);
        (lanes[0] + lanes[1]) + (lanes[2] + lanes[3])
    };

    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(a, b, base, remainder, result);
    result
}

/// AVX f64 Manhattan distance, 4 lanes per register.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX (runtime detection in `dispatch`)
/// - `a.len() == b.len()` (enforced by the public entry point)
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
#[inline]
pub(crate) unsafe fn manhattan_avx_f64(a: &[f64], b: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    let len = a.len();
    let chunks = len / 4;
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let sign_mask = _mm256_set1_pd(-0.0);
    let mut acc = _mm256_setzero_pd();
    for i in 0..chunks {
        let offset = i * 4;
        let va = _mm256_loadu_pd(a_ptr.add(offset));
        let vb = _mm256_loadu_pd(b_ptr.add(offset));
        let diff = _mm256_sub_pd(va, vb);
        acc = _mm256_add_pd(acc, _mm256_andnot_pd(sign_mask, diff));
    }
    let mut lanes = [0.0_f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut result = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(a, b, base, remainder, result);
    result
}

/// SSE2 f64 Manhattan distance, two 2-lane registers per 4-element chunk.
///
/// Callers must pass slices of equal length.
#[cfg(target_arch = "x86_64")]
#[inline]
pub(crate) fn manhattan_sse2_f64(a: &[f64], b: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    debug_assert_eq!(a.len(), b.len());
    let len = a.len();
    let chunks = len / 4;
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    // SAFETY: SSE2 is always available on x86_64. offset + 4 <= len for both
    // slices; _mm_loadu_pd tolerates unaligned addresses.
    let mut result = unsafe {
        let sign_mask = _mm_set1_pd(-0.0);
        let mut acc_lo = _mm_setzero_pd();
        let mut acc_hi = _mm_setzero_pd();
        for i in 0..chunks {
            let offset = i * 4;
            let diff_lo = _mm_sub_pd(
                _mm_loadu_pd(a_ptr.add(offset)),
                _mm_loadu_pd(b_ptr.add(offset)),
            );
            let diff_hi = _mm_sub_pd(
                _mm_loadu_pd(a_ptr.add(offset + 2)),
                _mm_loadu_pd(b_ptr.add(offset + 2)),
            );
            acc_lo = _mm_add_pd(acc_lo, _mm_andnot_pd(sign_mask, diff_lo));
            acc_hi = _mm_add_pd(acc_hi, _mm_andnot_pd(sign_mask, diff_hi));
        }
        let mut lanes = [0.0_f64; 2];
        _mm_storeu_pd(lanes.as_mut_ptr(), _mm_add_pd(acc_lo, acc_hi));
        lanes[0] + lanes[1]
    };

    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(a, b, base, remainder, result);
    result
}
