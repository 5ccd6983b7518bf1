//! # Column Descriptor

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::encoders::UnknownPolicy;
use crate::types::IndexType;
use crate::vocab::Vocabulary;

/// One fitted column: identity, vocabulary, and unknown handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: IndexType", deserialize = "T: IndexType"))]
pub struct ColumnSpec<T: IndexType> {
    /// The column name.
    pub name: CompactString,

    /// The fitted vocabulary, categories in assigned-index order.
    pub categories: Vocabulary<T>,

    /// The unknown-category policy.
    pub policy: UnknownPolicy,

    /// Whether an infrequent bucket index is reserved.
    pub bucket: bool,
}

impl<T: IndexType> ColumnSpec<T> {
    /// The column's block width in the output matrix.
    pub fn width(&self) -> usize {
        self.categories.len() + usize::from(self.bucket)
    }
}
