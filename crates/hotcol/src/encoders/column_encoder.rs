//! # Single-Column Indicator Encoder

use crate::category::CategoryToken;
use crate::encoders::UnknownPolicy;
use crate::errors::{HCResult, HotcolError};
use crate::matrix::SparseTriplets;
use crate::types::IndexType;
use crate::vocab::Vocabulary;

/// Encodes one column's values against a fitted [`Vocabulary`].
///
/// The encoder is read-only over the vocabulary and makes a single pass
/// over its input. The dense path writes 1.0 cells into a pre-zeroed,
/// pre-addressed slab with no per-row allocation; the sparse path
/// appends triplets.
#[derive(Debug, Clone, Copy)]
pub struct ColumnEncoder<'a, T: IndexType> {
    vocab: &'a Vocabulary<T>,
    policy: UnknownPolicy,
    bucket: bool,
    offset: usize,
}

impl<'a, T: IndexType> ColumnEncoder<'a, T> {
    /// Create an encoder for one column block.
    ///
    /// ## Arguments
    /// * `vocab` - The fitted vocabulary.
    /// * `policy` - The unknown-category policy.
    /// * `bucket` - Whether an infrequent bucket index is reserved.
    /// * `offset` - The block's column offset in the full output matrix.
    pub fn new(
        vocab: &'a Vocabulary<T>,
        policy: UnknownPolicy,
        bucket: bool,
        offset: usize,
    ) -> Self {
        debug_assert!(policy != UnknownPolicy::InfrequentBucket || bucket);
        Self {
            vocab,
            policy,
            bucket,
            offset,
        }
    }

    /// The block width: vocabulary size, plus the reserved bucket.
    pub fn width(&self) -> usize {
        self.vocab.len() + usize::from(self.bucket)
    }

    /// Resolve one value to its local block index.
    ///
    /// `None` means an all-zero block row (`IgnoreZeroRow` on a miss).
    fn resolve(
        &self,
        row: usize,
        token: &CategoryToken,
    ) -> HCResult<Option<usize>> {
        if let Some(index) = self.vocab.lookup(token) {
            return Ok(Some(index.to_usize().unwrap()));
        }

        match self.policy {
            UnknownPolicy::Error => Err(HotcolError::UnknownCategory {
                row,
                value: token.clone(),
            }),
            UnknownPolicy::IgnoreZeroRow => Ok(None),
            UnknownPolicy::InfrequentBucket => Ok(Some(self.vocab.len())),
        }
    }

    /// Encode values into a dense row-major slab.
    ///
    /// The slab covers `values.len()` rows of the full matrix starting
    /// at global row `row0`, and must be pre-zeroed.
    ///
    /// ## Arguments
    /// * `values` - The column values for this row chunk.
    /// * `row0` - The global row index of `values[0]`.
    /// * `full_width` - The full matrix width (the slab row stride).
    /// * `slab` - The chunk's rows of the output buffer.
    pub fn encode_dense_into(
        &self,
        values: &[CategoryToken],
        row0: usize,
        full_width: usize,
        slab: &mut [f64],
    ) -> HCResult<()> {
        debug_assert_eq!(slab.len(), values.len() * full_width);

        for (i, token) in values.iter().enumerate() {
            if let Some(local) = self.resolve(row0 + i, token)? {
                slab[i * full_width + self.offset + local] = 1.0;
            }
        }
        Ok(())
    }

    /// Encode values as sparse triplets.
    ///
    /// ## Arguments
    /// * `values` - The column values for this row chunk.
    /// * `row0` - The global row index of `values[0]`.
    /// * `out` - The triplet list to append to.
    pub fn encode_sparse_into(
        &self,
        values: &[CategoryToken],
        row0: usize,
        out: &mut SparseTriplets<T>,
    ) -> HCResult<()> {
        for (i, token) in values.iter().enumerate() {
            if let Some(local) = self.resolve(row0 + i, token)? {
                let value = self.offset + local;
                let col = T::from_usize(value)
                    .ok_or(HotcolError::IndexOverflow { value })?;
                out.push(row0 + i, col);
            }
        }
        Ok(())
    }
}
