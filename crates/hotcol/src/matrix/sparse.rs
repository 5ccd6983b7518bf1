//! # Sparse Triple-List Indicator Buffer

use serde::{Deserialize, Serialize};

use crate::types::IndexType;

/// A sparse indicator matrix as `(row, column-offset, value)` triple lists.
///
/// Every stored value is 1; zero cells are implicit. This is the
/// triplet layout compressed-sparse hosts assemble from directly.
///
/// Preferred over [`crate::matrix::DenseMatrix`] when
/// `rows * width` would make dense materialization memory-prohibitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseTriplets<T: IndexType> {
    /// The `(rows, cols)` shape of the full matrix.
    pub shape: (usize, usize),

    /// Row positions, one per set cell.
    pub rows: Vec<usize>,

    /// Column offsets, one per set cell.
    pub cols: Vec<T>,

    /// Cell values; always 1.
    pub values: Vec<i8>,
}

impl<T: IndexType> SparseTriplets<T> {
    /// Create an empty triplet list for the given shape.
    pub fn new(shape: (usize, usize)) -> Self {
        Self::with_capacity(shape, 0)
    }

    /// Create an empty triplet list with reserved capacity.
    pub fn with_capacity(
        shape: (usize, usize),
        capacity: usize,
    ) -> Self {
        Self {
            shape,
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// The number of set cells.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one set cell.
    pub fn push(
        &mut self,
        row: usize,
        col: T,
    ) {
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(1);
    }

    /// Append all cells of another triplet list of the same shape.
    pub fn append(
        &mut self,
        other: &mut Self,
    ) {
        debug_assert_eq!(self.shape, other.shape);
        self.rows.append(&mut other.rows);
        self.cols.append(&mut other.cols);
        self.values.append(&mut other.values);
    }

    /// Iterate over `(row, col, value)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T, i8)> + '_ {
        self.rows
            .iter()
            .zip(self.cols.iter())
            .zip(self.values.iter())
            .map(|((&r, &c), &v)| (r, c, v))
    }
}
