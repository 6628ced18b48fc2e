//! Fuzz target for the Manhattan kernel paths.
//!
//! Feeds arbitrary vectors (NaN, Inf, subnormals, odd lengths) through every
//! path to find:
//! - panics on equal-length input
//! - remainder handling that disagrees with the scalar loop
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_manhattan_paths
//! ```

#![no_main]

use arbitrary::Arbitrary;
use knnkit_core::kernels::{
    manhattan_portable, manhattan_scalar, manhattan_simd, manhattan_unrolled,
};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for Manhattan distance.
#[derive(Arbitrary, Debug)]
struct ManhattanInput {
    /// Query vector (truncated to a reasonable size).
    query: Vec<f32>,
    /// Data row (truncated/padded to the query length).
    row: Vec<f32>,
}

fuzz_target!(|input: ManhattanInput| {
    let max_dim = 2048;
    let dim = input.query.len().min(max_dim);

    let query: Vec<f32> = input.query.into_iter().take(dim).collect();
    let mut row: Vec<f32> = input.row.into_iter().take(dim).collect();
    row.resize(dim, 0.0);

    let scalar = manhattan_scalar(&query, &row);
    let unrolled = manhattan_unrolled(&query, &row);
    let portable = manhattan_portable(&query, &row);
    let simd = manhattan_simd(&query, &row);

    // Only compare well-behaved inputs; NaN/Inf just must not panic.
    if query.iter().chain(&row).all(|x| x.is_finite() && x.abs() < 1e6) {
        let tolerance = 1e-3_f32.max(scalar.abs() * 1e-3);
        for value in [unrolled, portable, simd] {
            assert!(
                (value - scalar).abs() <= tolerance,
                "path mismatch: scalar={scalar}, other={value}"
            );
        }
    }
});
