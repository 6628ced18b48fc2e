//! Search context: one query, one data matrix, and the execution flags.
//!
//! The context is immutable once built. The effective worker count is
//! resolved in the constructor, so a context can be shared between threads
//! and queried concurrently without any lazy initialization racing.

use std::num::NonZeroUsize;

use crate::bin_size::estimate_bin_size;
use crate::config::KernelConfig;
use crate::error::Result;
use crate::kernels::{dot_product_scalar, half_squared_norm_scalar, ManhattanPath};
use crate::matrix::{Matrix, Vector};
use crate::parallel::{fan_out_rows, sequential_rows};
use crate::Element;

/// Query vector, data matrix and kernel configuration for one search.
#[derive(Debug, Clone)]
pub struct SearchContext<T: Element> {
    query: Vector<T>,
    data: Matrix<T>,
    config: KernelConfig,
    workers: NonZeroUsize,
}

impl<T: Element> SearchContext<T> {
    /// Creates a context.
    ///
    /// The query length is expected to equal `data.cols()`; this is not
    /// checked here.
    #[must_use]
    pub fn new(query: impl Into<Vector<T>>, data: Matrix<T>, config: KernelConfig) -> Self {
        let workers = config.effective_workers();
        tracing::debug!(
            max_workers = config.max_workers,
            workers = workers.get(),
            "resolved worker count"
        );
        Self {
            query: query.into(),
            data,
            config,
            workers,
        }
    }

    /// Creates a context from nested rows.
    pub fn from_rows(query: Vec<T>, rows: Vec<Vec<T>>, config: KernelConfig) -> Result<Self> {
        Ok(Self::new(query, Matrix::from_rows(rows)?, config))
    }

    /// The query vector.
    #[must_use]
    pub fn query(&self) -> &Vector<T> {
        &self.query
    }

    /// The data matrix.
    #[must_use]
    pub fn data(&self) -> &Matrix<T> {
        &self.data
    }

    /// The execution flags this context was built with.
    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Worker pool capacity used when `multithread` is set.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Manhattan distance between the query and data row `row`.
    ///
    /// Uses the SIMD path when `use_simd` is set, the unrolled path for
    /// queries longer than 128 elements, and the scalar loop otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range or the row length differs from the
    /// query length.
    #[must_use]
    pub fn manhattan_distance(&self, row: usize) -> T {
        self.manhattan_path().run(&self.query, self.data.row(row))
    }

    /// Manhattan distance from the query to every data row.
    #[must_use]
    pub fn manhattan_all(&self) -> Vec<T> {
        let path = self.manhattan_path();
        tracing::trace!(?path, rows = self.data.rows(), "manhattan over all rows");
        self.reduce_rows(|i| path.run(&self.query, self.data.row(i)))
    }

    /// Dot product of the query with every data row.
    #[must_use]
    pub fn dot_product_all(&self) -> Vec<T> {
        self.reduce_rows(|i| dot_product_scalar(&self.query, self.data.row(i)))
    }

    /// `0.5 * ||row||²` for every data row.
    #[must_use]
    pub fn half_squared_norm_all(&self) -> Vec<T> {
        self.reduce_rows(|i| half_squared_norm_scalar(self.data.row(i)))
    }

    /// Squared L2 distance to every row through the norm decomposition
    /// `||q - d||² = 2 * (half(q) - q·d + half(d))`.
    ///
    /// Negative results from cancellation are clamped to zero.
    #[must_use]
    pub fn squared_euclidean_all(&self) -> Vec<T> {
        let query_half = half_squared_norm_scalar(&self.query);
        self.dot_product_all()
            .into_iter()
            .zip(self.half_squared_norm_all())
            .map(|(dot, row_half)| {
                let distance = T::TWO * (query_half - dot + row_half);
                if distance < T::ZERO {
                    T::ZERO
                } else {
                    distance
                }
            })
            .collect()
    }

    /// Recommended partition size for this data set.
    #[must_use]
    pub fn estimate_bin_size(&self) -> u64 {
        estimate_bin_size(u64::try_from(self.data.rows()).unwrap_or(u64::MAX))
    }

    fn manhattan_path(&self) -> ManhattanPath {
        ManhattanPath::select(self.query.len(), self.config.use_simd)
    }

    fn reduce_rows<F>(&self, reduce: F) -> Vec<T>
    where
        F: Fn(usize) -> T + Sync,
    {
        if self.config.multithread {
            fan_out_rows(self.data.rows(), self.workers, reduce)
        } else {
            sequential_rows(self.data.rows(), reduce)
        }
    }
}

// Compile-time check: a context can be shared across threads.
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SearchContext<f32>>();
    assert_send_sync::<SearchContext<f64>>();
};
