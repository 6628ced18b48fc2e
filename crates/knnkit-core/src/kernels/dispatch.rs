//! Runtime ISA detection and Manhattan path selection.
//!
//! This module provides:
//! - `SimdLevel` and the cached `simd_level()` detection
//! - the per-type vector entry points wired into [`Element`]
//! - `ManhattanPath`, the SIMD / unrolled / scalar policy

use super::{manhattan_portable, manhattan_scalar, manhattan_unrolled, UNROLL_THRESHOLD};
use crate::Element;

// =============================================================================
// Cached SIMD Level Detection
// =============================================================================

/// Vector instruction set used by the SIMD Manhattan path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    /// AVX available (x86_64): 256-bit f64 lanes.
    Avx,
    /// x86_64 baseline SSE2.
    Sse2,
    /// NEON (aarch64, always true).
    Neon,
    /// Portable 4-lane array fallback.
    Portable,
}

/// Cached SIMD level - detected once at first use.
static SIMD_LEVEL: std::sync::OnceLock<SimdLevel> = std::sync::OnceLock::new();

fn detect_simd_level() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx") {
            return SimdLevel::Avx;
        }
        return SimdLevel::Sse2;
    }

    #[cfg(target_arch = "aarch64")]
    {
        return SimdLevel::Neon;
    }

    #[allow(unreachable_code)]
    SimdLevel::Portable
}

/// Returns the cached SIMD capability level.
#[inline]
#[must_use]
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(detect_simd_level)
}

// =============================================================================
// Per-type vector entry points
// =============================================================================

#[inline]
pub(crate) fn manhattan_lanes_f32(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    match simd_level() {
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx | SimdLevel::Sse2 => super::manhattan_sse_f32(a, b),
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => super::manhattan_neon_f32(a, b),
        _ => manhattan_portable(a, b),
    }
}

#[inline]
pub(crate) fn manhattan_lanes_f64(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    match simd_level() {
        // SAFETY: SimdLevel::Avx is only produced after is_x86_feature_detected!("avx").
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Avx => unsafe { super::manhattan_avx_f64(a, b) },
        #[cfg(target_arch = "x86_64")]
        SimdLevel::Sse2 => super::manhattan_sse2_f64(a, b),
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => super::manhattan_neon_f64(a, b),
        _ => manhattan_portable(a, b),
    }
}

/// Manhattan distance on the vector path: chunks of 4 in registers plus a
/// scalar tail, taken for every length including short ones.
///
/// # Panics
///
/// Panics if `query.len() != row.len()`.
#[inline]
#[must_use]
pub fn manhattan_simd<T: Element>(query: &[T], row: &[T]) -> T {
    T::manhattan_lanes(query, row)
}

// =============================================================================
// Path selection
// =============================================================================

/// Kernel chosen for one Manhattan evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManhattanPath {
    /// Vector registers, chunk of 4 + scalar tail.
    Simd,
    /// 4-wide unrolled scalar loop + tail.
    Unrolled,
    /// One element per iteration.
    Scalar,
}

impl ManhattanPath {
    /// Selects the path: SIMD when requested, otherwise unrolled above
    /// [`UNROLL_THRESHOLD`] elements, otherwise scalar.
    #[inline]
    #[must_use]
    pub fn select(len: usize, use_simd: bool) -> Self {
        if use_simd {
            Self::Simd
        } else if len > UNROLL_THRESHOLD {
            Self::Unrolled
        } else {
            Self::Scalar
        }
    }

    /// Runs this path on `query` and `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is shorter than `query` (or of a different length
    /// on the SIMD path).
    #[inline]
    #[must_use]
    pub fn run<T: Element>(self, query: &[T], row: &[T]) -> T {
        match self {
            Self::Simd => manhattan_simd(query, row),
            Self::Unrolled => manhattan_unrolled(query, row),
            Self::Scalar => manhattan_scalar(query, row),
        }
    }
}

/// Manhattan distance using the path [`ManhattanPath::select`] picks.
#[inline]
#[must_use]
pub fn manhattan<T: Element>(query: &[T], row: &[T], use_simd: bool) -> T {
    ManhattanPath::select(query.len(), use_simd).run(query, row)
}
