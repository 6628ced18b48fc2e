//! Floating-point element types accepted by the kernels.
//!
//! [`Element`] is sealed and implemented for `f32` and `f64` only. Each impl
//! wires the type to its own vectorized Manhattan reduction, so the concrete
//! lane width is fixed at compile time.

use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A single- or double-precision float usable as a vector element.
pub trait Element:
    sealed::Sealed
    + Copy
    + Default
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Sum
{
    /// Additive identity.
    const ZERO: Self;
    /// `0.5`, the half-norm scale factor.
    const HALF: Self;
    /// `2.0`, used to undo the half-norm scale.
    const TWO: Self;

    /// Absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// Manhattan distance on the best vector ISA available for this type.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    #[doc(hidden)]
    fn manhattan_lanes(query: &[Self], row: &[Self]) -> Self;
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn manhattan_lanes(query: &[Self], row: &[Self]) -> Self {
        crate::kernels::manhattan_lanes_f32(query, row)
    }
}

impl Element for f64 {
    const ZERO: Self = 0.0;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn manhattan_lanes(query: &[Self], row: &[Self]) -> Self {
        crate::kernels::manhattan_lanes_f64(query, row)
    }
}
