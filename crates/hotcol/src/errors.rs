//! # Error Types

use compact_str::CompactString;

use crate::category::CategoryToken;

/// Errors from hotcol operations.
#[derive(Debug, thiserror::Error)]
pub enum HotcolError {
    /// A host value could not be normalized to a [`CategoryToken`].
    #[error("invalid token: {detail}")]
    InvalidToken {
        /// Description of the offending value.
        detail: String,
    },

    /// Distinct-category count exceeded the configured maximum during fit.
    #[error("category capacity exceeded: {count} distinct categories, limit {limit}")]
    CapacityExceeded {
        /// The configured category limit.
        limit: usize,
        /// The distinct-category count that tripped the limit.
        count: usize,
    },

    /// A value absent from the vocabulary was seen at transform time
    /// under the `Error` unknown policy.
    #[error("unknown category {value} at row {row}")]
    UnknownCategory {
        /// The row position of the offending value.
        row: usize,
        /// The offending value.
        value: CategoryToken,
    },

    /// A decode input row violated the one-hot invariant.
    #[error("malformed indicator row {row}: {set_bits} set positions in one column block")]
    MalformedIndicatorRow {
        /// The row position of the malformed block.
        row: usize,
        /// The number of set positions found.
        set_bits: usize,
    },

    /// The supplied table or matrix does not match the fitted state.
    #[error("column mismatch: expected {expected}, got {actual}")]
    ColumnMismatch {
        /// Description of the fitted columns.
        expected: String,
        /// Description of the supplied columns.
        actual: String,
    },

    /// Table columns have unequal lengths.
    #[error("column {column:?} has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// The ragged column.
        column: CompactString,
        /// The row count of the first column.
        expected: usize,
        /// The row count of the ragged column.
        actual: usize,
    },

    /// Transform or inverse-transform called before a successful fit.
    #[error("encoder state is not fitted")]
    StateNotFitted,

    /// A column offset exceeds the capacity of the index type.
    #[error("column offset ({value}) exceeds index type capacity")]
    IndexOverflow {
        /// The offset that exceeded the capacity.
        value: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error from the persistence layer.
    #[error("parse error: {0}")]
    Parse(String),

    /// A per-column failure, tagged with the originating column.
    #[error("column {column:?}: {source}")]
    Column {
        /// The originating column.
        column: CompactString,
        /// The underlying error.
        source: Box<HotcolError>,
    },
}

impl HotcolError {
    /// Tag this error with the originating column.
    ///
    /// Errors already carrying a column tag are returned unchanged.
    pub fn in_column(
        self,
        column: impl Into<CompactString>,
    ) -> Self {
        match self {
            HotcolError::Column { .. } => self,
            other => HotcolError::Column {
                column: column.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type for hotcol operations.
pub type HCResult<T> = core::result::Result<T, HotcolError>;
