//! # knnkit Core
//!
//! Pairwise distance and similarity kernels for nearest-neighbor search.
//!
//! ## Features
//!
//! - **Manhattan (L1)**: scalar, 4-wide unrolled, and SIMD paths
//!   (SSE/AVX on x86_64, NEON on aarch64, portable fallback elsewhere)
//! - **Dot product**: query against every data row
//! - **Half-norm**: `0.5 * ||row||²` precomputation for squared-L2 decomposition
//! - **Worker pool fan-out**: bounded, semaphore-admitted, fork-join per call
//! - **Bin-size heuristic**: partition size from data set cardinality
//!
//! ## Quick Start
//!
//! ```rust
//! use knnkit_core::{KernelConfig, SearchContext};
//!
//! fn main() -> Result<(), knnkit_core::Error> {
//!     let config = KernelConfig::new().with_simd(true).with_multithread(true);
//!     let ctx = SearchContext::from_rows(
//!         vec![1.0_f32, 2.0, 3.0, 4.0],
//!         vec![vec![1.0, 2.0, 3.0, 4.0], vec![0.0, 0.0, 0.0, 0.0]],
//!         config,
//!     )?;
//!
//!     assert_eq!(ctx.manhattan_distance(1), 10.0);
//!     assert_eq!(ctx.dot_product_all(), vec![30.0, 0.0]);
//!     assert_eq!(ctx.half_squared_norm_all(), vec![15.0, 0.0]);
//!     assert_eq!(ctx.estimate_bin_size(), 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_lossless
    )
)]

pub mod bin_size;
pub mod config;
pub mod context;
#[cfg(test)]
mod context_tests;
pub mod element;
pub mod error;
pub mod kernels;
pub mod matrix;
#[cfg(test)]
mod matrix_tests;
pub mod parallel;

pub use bin_size::{estimate_bin_size, MAX_BIN_SIZE};
pub use config::KernelConfig;
pub use context::SearchContext;
pub use element::Element;
pub use error::{Error, Result};
pub use kernels::{simd_level, ManhattanPath, SimdLevel};
pub use matrix::{Matrix, Vector};
