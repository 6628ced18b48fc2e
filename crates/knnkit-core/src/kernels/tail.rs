//! Remainder handling for the 4-wide loops.
//!
//! After a chunk-of-4 loop at most three elements are left over. The macro
//! below expands to a 2->1 unrolled tail instead of a counted loop.

/// Adds `|a[i] - b[i]|` for the `remainder` (0-3) elements starting at `base`.
macro_rules! sum_abs_diff_remainder {
    ($a:expr, $b:expr, $base:expr, $remainder:expr, $result:expr) => {
        if $remainder >= 2 {
            $result += $crate::Element::abs($a[$base] - $b[$base])
                + $crate::Element::abs($a[$base + 1] - $b[$base + 1]);
            if $remainder == 3 {
                $result += $crate::Element::abs($a[$base + 2] - $b[$base + 2]);
            }
        } else if $remainder == 1 {
            $result += $crate::Element::abs($a[$base] - $b[$base]);
        }
    };
}

pub(crate) use sum_abs_diff_remainder;
