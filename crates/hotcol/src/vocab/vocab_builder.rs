//! # Vocabulary Builder

use core::num::NonZeroUsize;

use crate::category::CategoryToken;
use crate::errors::{HCResult, HotcolError};
use crate::types::{HCHashMap, IndexType, hash_map_new};
use crate::vocab::Vocabulary;

/// Builds a [`Vocabulary`] from one column's values.
///
/// Discovery is a single linear pass assigning indices in
/// first-occurrence order. Given the same input sequence, the index
/// assignment is always identical; per-column building is strictly
/// sequential, only cross-column work runs in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VocabBuilder {
    /// Upper bound on distinct categories per column.
    ///
    /// Guards against pathological high-cardinality columns blowing up
    /// the output width. `None` is unbounded.
    pub max_categories: Option<NonZeroUsize>,

    /// Exclude the missing-value token from the vocabulary.
    ///
    /// A dropped missing marker is always unknown at transform time.
    pub drop_missing: bool,
}

impl VocabBuilder {
    /// Sets the configured category limit.
    pub fn with_max_categories(
        mut self,
        max_categories: Option<NonZeroUsize>,
    ) -> Self {
        self.max_categories = max_categories;
        self
    }

    /// Sets the configured missing-marker handling.
    pub fn with_drop_missing(
        mut self,
        drop_missing: bool,
    ) -> Self {
        self.drop_missing = drop_missing;
        self
    }

    /// Build a [`Vocabulary`] from an ordered value sequence.
    ///
    /// ## Arguments
    /// * `values` - The column values, duplicates and missing markers
    ///   included.
    ///
    /// ## Returns
    /// The vocabulary; [`HotcolError::CapacityExceeded`] if the
    /// distinct-category count exceeds the configured maximum, or
    /// [`HotcolError::IndexOverflow`] if it exceeds the index type.
    pub fn build<T: IndexType>(
        &self,
        values: &[CategoryToken],
    ) -> HCResult<Vocabulary<T>> {
        let mut token_to_index: HCHashMap<CategoryToken, T> = hash_map_new();
        let mut index_to_token: Vec<CategoryToken> = Vec::new();

        for token in values {
            if self.drop_missing && token.is_missing() {
                continue;
            }
            if token_to_index.contains_key(token) {
                continue;
            }

            let count = index_to_token.len();
            if let Some(limit) = self.max_categories
                && count >= limit.get()
            {
                return Err(HotcolError::CapacityExceeded {
                    limit: limit.get(),
                    count: count + 1,
                });
            }

            let index = T::from_usize(count)
                .ok_or(HotcolError::IndexOverflow { value: count })?;

            token_to_index.insert(token.clone(), index);
            index_to_token.push(token.clone());
        }

        Ok(Vocabulary::from_parts(token_to_index, index_to_token))
    }
}
