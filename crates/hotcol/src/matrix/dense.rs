//! # Dense Row-Major Indicator Buffer

use serde::{Deserialize, Serialize};

/// A dense row-major `f64` matrix.
///
/// One row per input row; width is the sum of the fitted column block
/// widths. The encoder only ever writes 0.0 and 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Allocate an all-zero matrix.
    pub fn zeros(
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// ## Panics
    /// Panics if the buffer length is not `rows * cols`.
    pub fn from_row_major(
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    ) -> Self {
        assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// The `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// A row as a slice.
    pub fn row(
        &self,
        row: usize,
    ) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// The backing row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The backing row-major buffer, mutably.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume into the backing row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
