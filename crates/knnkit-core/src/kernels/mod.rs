//! Per-row distance and reduction kernels.
//!
//! # Module Structure
//!
//! - `scalar` — reference loops (Manhattan, dot product, half-norm)
//! - `unrolled` — 4-wide unrolled Manhattan for long vectors
//! - `portable` — 4-lane array Manhattan for targets without a native kernel
//! - `tail` — remainder handling for the 4-wide loops
//! - `x86` — SSE/SSE2/AVX Manhattan kernels (x86_64 only)
//! - `neon` — NEON Manhattan kernels (aarch64 only)
//! - `dispatch` — ISA detection and SIMD / unrolled / scalar path selection
//!
//! Every path computes the same sum; only the accumulation order differs, so
//! results agree within floating-point tolerance rather than bit for bit.

// =============================================================================
// Unsafe Invariants Reference
// =============================================================================
// SAFETY: Shared invariants for SIMD unsafe blocks in this module tree.
// - Condition 1: Pointer offsets come from `i * 4` with `i < len / 4`, and both
//   slices have the same length (asserted by the per-type entry points in `dispatch`).
// - Condition 2: Target-featured functions are called only after runtime feature
//   checks or on architectures where the feature is guaranteed.
// - Condition 3: Loads/stores use unaligned variants (`loadu`, `vld1q`).

mod tail;

pub mod scalar;
pub mod unrolled;
pub mod portable;

#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(target_arch = "aarch64")]
mod neon;

#[cfg(target_arch = "x86_64")]
pub(crate) use x86::{manhattan_avx_f64, manhattan_sse2_f64, manhattan_sse_f32};

#[cfg(target_arch = "aarch64")]
pub(crate) use neon::{manhattan_neon_f32, manhattan_neon_f64};

mod dispatch;

pub use dispatch::{manhattan, manhattan_simd, simd_level, ManhattanPath, SimdLevel};
pub(crate) use dispatch::{manhattan_lanes_f32, manhattan_lanes_f64};
pub use portable::manhattan_portable;
pub use scalar::{dot_product_scalar, half_squared_norm_scalar, manhattan_scalar};
pub use unrolled::{manhattan_unrolled, UNROLL_THRESHOLD};

// =============================================================================
// Tests (separate files per project rules)
// =============================================================================
