//! # Indicator Matrices
//!
//! Transform output is an indicator matrix: rows by the sum of per-column
//! block widths, values in {0, 1}. Both realizations are plain typed
//! buffers so host environments can consume them without this crate's
//! types crossing the boundary:
//!
//! * [`DenseMatrix`] - a row-major `f64` buffer.
//! * [`SparseTriplets`] - `(row, column-offset, value)` triple lists.

pub mod dense;
pub mod sparse;

#[doc(inline)]
pub use dense::DenseMatrix;
#[doc(inline)]
pub use sparse::SparseTriplets;

use crate::types::IndexType;

/// The output of encoding: dense or sparse, caller's choice.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorMatrix<T: IndexType> {
    /// Row-major dense realization.
    Dense(DenseMatrix),

    /// Triple-list sparse realization.
    Sparse(SparseTriplets<T>),
}

impl<T: IndexType> IndicatorMatrix<T> {
    /// The `(rows, cols)` shape of the matrix.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            IndicatorMatrix::Dense(m) => m.shape(),
            IndicatorMatrix::Sparse(m) => m.shape,
        }
    }

    /// The number of rows.
    pub fn n_rows(&self) -> usize {
        self.shape().0
    }
}

impl<T: IndexType> From<DenseMatrix> for IndicatorMatrix<T> {
    fn from(m: DenseMatrix) -> Self {
        IndicatorMatrix::Dense(m)
    }
}

impl<T: IndexType> From<SparseTriplets<T>> for IndicatorMatrix<T> {
    fn from(m: SparseTriplets<T>) -> Self {
        IndicatorMatrix::Sparse(m)
    }
}
