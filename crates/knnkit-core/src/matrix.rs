//! Statically typed query and data containers.
//!
//! [`Vector`] is one immutable sequence of elements. [`Matrix`] is a
//! collection of equal-length rows kept in one row-major buffer, so a ragged
//! data set cannot be represented at all.

use std::ops::Deref;

use crate::error::{Error, Result};
use crate::Element;

/// An immutable, fixed-length sequence of elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T: Element> {
    values: Vec<T>,
}

impl<T: Element> Vector<T> {
    /// Wraps `values` as a vector.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the vector, returning its elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Element> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Element> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A `(rows, cols)` collection of equal-length vectors in row-major order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix<T: Element> {
    values: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Builds a matrix from a flat row-major buffer.
    ///
    /// Fails with [`Error::Shape`] unless `values.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vec<T>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or(Error::Shape {
            expected: usize::MAX,
            actual: values.len(),
        })?;
        if values.len() != expected {
            return Err(Error::Shape {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values, rows, cols })
    }

    /// Builds a matrix from nested rows; the first row fixes the width.
    ///
    /// Fails with [`Error::Shape`] on the first row of a different length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut values = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::Shape {
                    expected: cols,
                    actual: row.len(),
                });
            }
            values.extend(row);
        }
        Ok(Self {
            values,
            rows: row_count,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the length of every row).
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` if the matrix has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.rows()`.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> &[T] {
        assert!(
            index < self.rows,
            "row index {index} out of range for {} rows",
            self.rows
        );
        let start = index * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Iterates over the rows in order.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// The row-major backing buffer.
    #[inline]
    #[must_use]
    pub fn as_flat(&self) -> &[T] {
        &self.values
    }
}
