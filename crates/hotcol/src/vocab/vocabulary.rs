//! # Token ``{ CategoryToken <-> T }`` Vocabulary

use serde::{Deserialize, Serialize};

use crate::category::CategoryToken;
use crate::errors::{HCResult, HotcolError};
use crate::types::{HCHashMap, IndexType, hash_map_with_capacity};

/// An ordered, bidirectional token/index mapping for one column.
///
/// Indices are dense in `[0, len)`, assigned in first-occurrence order
/// of the fitted data. Instances are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: IndexType> {
    token_to_index: HCHashMap<CategoryToken, T>,
    index_to_token: Vec<CategoryToken>,
}

impl<T: IndexType> Vocabulary<T> {
    /// Internal constructor for pre-validated parts.
    pub(crate) fn from_parts(
        token_to_index: HCHashMap<CategoryToken, T>,
        index_to_token: Vec<CategoryToken>,
    ) -> Self {
        debug_assert_eq!(token_to_index.len(), index_to_token.len());
        Self {
            token_to_index,
            index_to_token,
        }
    }

    /// Reconstruct a vocabulary from tokens in assigned-index order.
    ///
    /// This is the persistence reload path; the resulting index
    /// assignment is identical to the one the tokens were saved from.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, in assigned-index order.
    ///
    /// ## Returns
    /// The vocabulary, [`HotcolError::VocabConflict`] on a duplicate
    /// token, or [`HotcolError::IndexOverflow`] if the token count
    /// exceeds the index type capacity.
    pub fn from_tokens(tokens: Vec<CategoryToken>) -> HCResult<Self> {
        let mut token_to_index: HCHashMap<CategoryToken, T> =
            hash_map_with_capacity(tokens.len());

        for (index, token) in tokens.iter().enumerate() {
            let index = T::from_usize(index)
                .ok_or(HotcolError::IndexOverflow { value: index })?;

            if token_to_index.insert(token.clone(), index).is_some() {
                return Err(HotcolError::VocabConflict(format!(
                    "duplicate category {token}"
                )));
            }
        }

        Ok(Self::from_parts(token_to_index, tokens))
    }

    /// The number of categories in the vocabulary.
    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.index_to_token.is_empty()
    }

    /// Return the assigned index for a token, if any.
    pub fn lookup(
        &self,
        token: &CategoryToken,
    ) -> Option<T> {
        self.token_to_index.get(token).copied()
    }

    /// Return the token at an assigned index, if in range.
    pub fn token_at(
        &self,
        index: usize,
    ) -> Option<&CategoryToken> {
        self.index_to_token.get(index)
    }

    /// The tokens, in assigned-index order.
    pub fn tokens(&self) -> &[CategoryToken] {
        &self.index_to_token
    }
}

impl<T: IndexType> Serialize for Vocabulary<T> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.index_to_token.serialize(serializer)
    }
}

impl<'de, T: IndexType> Deserialize<'de> for Vocabulary<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tokens = Vec::<CategoryToken>::deserialize(deserializer)?;
        Vocabulary::from_tokens(tokens).map_err(serde::de::Error::custom)
    }
}
