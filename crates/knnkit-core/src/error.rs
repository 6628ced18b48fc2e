//! Error types for knnkit-core.
//!
//! The numeric kernels never fail; errors only come from building the
//! containers they read and from loading a [`KernelConfig`](crate::KernelConfig).

use thiserror::Error;

/// knnkit error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Matrix values do not fit the declared shape, or rows are ragged.
    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    Shape {
        /// Element count implied by the declared shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },

    /// Configuration could not be extracted from its sources.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result type alias for knnkit operations.
pub type Result<T> = std::result::Result<T, Error>;
