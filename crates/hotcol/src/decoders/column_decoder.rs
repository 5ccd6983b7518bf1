//! # Single-Column Indicator Decoder

use crate::category::CategoryToken;
use crate::errors::{HCResult, HotcolError};
use crate::matrix::{DenseMatrix, SparseTriplets};
use crate::types::IndexType;
use crate::vocab::Vocabulary;

/// Decodes one column's block of an indicator matrix back to tokens.
///
/// Each row is expected to carry exactly one set position within the
/// block. Zero set positions (an `IgnoreZeroRow`-encoded unknown) decode
/// to [`CategoryToken::Missing`], as does the reserved bucket index,
/// whose source category is unrecoverable. More than one set position
/// is [`HotcolError::MalformedIndicatorRow`].
#[derive(Debug, Clone, Copy)]
pub struct ColumnDecoder<'a, T: IndexType> {
    vocab: &'a Vocabulary<T>,
    bucket: bool,
    offset: usize,
}

impl<'a, T: IndexType> ColumnDecoder<'a, T> {
    /// Create a decoder for one column block.
    ///
    /// ## Arguments
    /// * `vocab` - The fitted vocabulary.
    /// * `bucket` - Whether an infrequent bucket index is reserved.
    /// * `offset` - The block's column offset in the full matrix.
    pub fn new(
        vocab: &'a Vocabulary<T>,
        bucket: bool,
        offset: usize,
    ) -> Self {
        Self {
            vocab,
            bucket,
            offset,
        }
    }

    /// The block width: vocabulary size, plus the reserved bucket.
    pub fn width(&self) -> usize {
        self.vocab.len() + usize::from(self.bucket)
    }

    /// Map one row's scan result back to a token.
    fn token_for(
        &self,
        row: usize,
        first_set: Option<usize>,
        set_bits: usize,
    ) -> HCResult<CategoryToken> {
        match set_bits {
            0 => Ok(CategoryToken::Missing),
            1 => {
                let local = first_set.unwrap();
                if self.bucket && local == self.vocab.len() {
                    return Ok(CategoryToken::Missing);
                }
                self.vocab.token_at(local).cloned().ok_or_else(|| {
                    HotcolError::Parse(format!(
                        "set position {local} outside block at row {row}"
                    ))
                })
            }
            set_bits => Err(HotcolError::MalformedIndicatorRow { row, set_bits }),
        }
    }

    /// Decode this column's block from a dense matrix.
    ///
    /// A cell is treated as set iff its value is non-zero.
    pub fn decode_dense(
        &self,
        matrix: &DenseMatrix,
    ) -> HCResult<Vec<CategoryToken>> {
        let (rows, _) = matrix.shape();
        let width = self.width();

        let mut out = Vec::with_capacity(rows);
        for row in 0..rows {
            let block = &matrix.row(row)[self.offset..self.offset + width];

            let mut first_set = None;
            let mut set_bits = 0;
            for (local, &value) in block.iter().enumerate() {
                if value != 0.0 {
                    set_bits += 1;
                    first_set.get_or_insert(local);
                }
            }

            out.push(self.token_for(row, first_set, set_bits)?);
        }
        Ok(out)
    }

    /// Decode this column's block from sparse triplets.
    pub fn decode_sparse(
        &self,
        matrix: &SparseTriplets<T>,
    ) -> HCResult<Vec<CategoryToken>> {
        let rows = matrix.shape.0;
        let lo = self.offset;
        let hi = self.offset + self.width();

        let mut first_set: Vec<Option<usize>> = vec![None; rows];
        let mut set_bits: Vec<usize> = vec![0; rows];

        for (row, col, value) in matrix.iter() {
            if row >= rows {
                return Err(HotcolError::Parse(format!(
                    "triplet row {row} outside shape ({rows} rows)"
                )));
            }
            let col = col.to_usize().unwrap();
            if (lo..hi).contains(&col) && value != 0 {
                set_bits[row] += 1;
                first_set[row].get_or_insert(col - lo);
            }
        }

        (0..rows)
            .map(|row| self.token_for(row, first_set[row], set_bits[row]))
            .collect()
    }
}
