//! ARM NEON Manhattan kernels for aarch64.
//!
//! NEON is always available on aarch64, so no runtime detection is needed.
//! f32 uses one `float32x4_t` per 4-element chunk, f64 uses two `float64x2_t`.

use super::tail::sum_abs_diff_remainder;

/// NEON f32 Manhattan distance.
///
/// Callers must pass slices of equal length.
#[cfg(target_arch = "aarch64")]
#[inline]
pub(crate) fn manhattan_neon_f32(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::aarch64::*;

    debug_assert_eq!(a.len(), b.len());
    let len = a.len();
    let chunks = len / 4;
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    // SAFETY: vdupq_n_f32 is always safe on aarch64.
    let mut acc = unsafe { vdupq_n_f32(0.0) };

    for i in 0..chunks {
        let offset = i * 4;
        // SAFETY: offset + 4 <= len for both slices, vld1q_f32 handles unaligned loads.
        unsafe {
            let va = vld1q_f32(a_ptr.add(offset));
            let vb = vld1q_f32(b_ptr.add(offset));
            let diff = vsubq_f32(va, vb);
            acc = vaddq_f32(acc, vabsq_f32(diff));
        }
    }

    // SAFETY: vaddvq_f32 is always safe on aarch64.
    let mut result = unsafe { vaddvq_f32(acc) };

    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(a, b, base, remainder, result);
    result
}

/// NEON f64 Manhattan distance.
///
/// Callers must pass slices of equal length.
#[cfg(target_arch = "aarch64")]
#[inline]
pub(crate) fn manhattan_neon_f64(a: &[f64], b: &[f64]) -> f64 {
    use std::arch::aarch64::*;

    debug_assert_eq!(a.len(), b.len());
    let len = a.len();
    let chunks = len / 4;
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    // SAFETY: vdupq_n_f64 is always safe on aarch64.
    let mut acc_lo = unsafe { vdupq_n_f64(0.0) };
    let mut acc_hi = unsafe { vdupq_n_f64(0.0) };

    for i in 0..chunks {
        let offset = i * 4;
        // SAFETY: offset + 4 <= len for both slices, vld1q_f64 handles unaligned loads.
        unsafe {
            let diff_lo = vsubq_f64(vld1q_f64(a_ptr.add(offset)), vld1q_f64(b_ptr.add(offset)));
            let diff_hi = vsubq_f64(
                vld1q_f64(a_ptr.add(offset + 2)),
                vld1q_f64(b_ptr.add(offset + 2)),
            );
            acc_lo = vaddq_f64(acc_lo, vabsq_f64(diff_lo));
            acc_hi = vaddq_f64(acc_hi, vabsq_f64(diff_hi));
        }
    }

    // SAFETY: vaddq_f64/vaddvq_f64 are always safe on aarch64.
    let mut result = unsafe { vaddvq_f64(vaddq_f64(acc_lo, acc_hi)) };

    let base = chunks * 4;
    let remainder = len - base;
    sum_abs_diff_remainder!(a, b, base, remainder, result);
    result
}
