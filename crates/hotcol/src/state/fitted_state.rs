//! # Fitted Encoder State

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::errors::{HCResult, HotcolError};
use crate::state::ColumnSpec;
use crate::table::Table;
use crate::types::IndexType;

/// The ordered column descriptors produced by one fit call.
///
/// Block offsets lay out column blocks in input-column order; the
/// total width is the sum of block widths. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    bound(serialize = "T: IndexType", deserialize = "T: IndexType"),
    try_from = "Vec<ColumnSpec<T>>",
    into = "Vec<ColumnSpec<T>>"
)]
pub struct FittedState<T: IndexType> {
    columns: Vec<ColumnSpec<T>>,
    offsets: Vec<usize>,
    width: usize,
}

impl<T: IndexType> FittedState<T> {
    /// Build a state from ordered column descriptors.
    ///
    /// ## Arguments
    /// * `columns` - The descriptors, in input-column order.
    ///
    /// ## Returns
    /// The state, or [`HotcolError::IndexOverflow`] if the final column
    /// offset exceeds the index type capacity.
    pub fn init(columns: Vec<ColumnSpec<T>>) -> HCResult<Self> {
        let mut offsets = Vec::with_capacity(columns.len());
        let mut width = 0;

        for spec in &columns {
            offsets.push(width);
            width += spec.width();
        }

        // Every sparse column offset must round-trip through T.
        if width > 0 && T::from_usize(width - 1).is_none() {
            return Err(HotcolError::IndexOverflow { value: width - 1 });
        }

        Ok(Self {
            columns,
            offsets,
            width,
        })
    }

    /// The column descriptors, in input-column order.
    pub fn columns(&self) -> &[ColumnSpec<T>] {
        &self.columns
    }

    /// The block offset of each column, in input-column order.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The total output width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of fitted columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check that a table's columns match this state, name for name.
    ///
    /// Matching is order-sensitive; block offsets depend on column
    /// order.
    pub fn check_table(
        &self,
        table: &Table,
    ) -> HCResult<()> {
        let expected: Vec<&str> =
            self.columns.iter().map(|c| c.name.as_str()).collect();
        let actual: Vec<&str> = table.names().collect();

        if expected != actual {
            return Err(HotcolError::ColumnMismatch {
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
        Ok(())
    }

    /// Check that a matrix shape matches this state's width.
    pub fn check_width(
        &self,
        cols: usize,
    ) -> HCResult<()> {
        if cols != self.width {
            return Err(HotcolError::ColumnMismatch {
                expected: format!("{} output columns", self.width),
                actual: format!("{cols} output columns"),
            });
        }
        Ok(())
    }

    /// The fitted column names, in order.
    pub fn names(&self) -> impl Iterator<Item = &CompactString> {
        self.columns.iter().map(|c| &c.name)
    }
}

impl<T: IndexType> TryFrom<Vec<ColumnSpec<T>>> for FittedState<T> {
    type Error = HotcolError;

    fn try_from(columns: Vec<ColumnSpec<T>>) -> HCResult<Self> {
        Self::init(columns)
    }
}

impl<T: IndexType> From<FittedState<T>> for Vec<ColumnSpec<T>> {
    fn from(state: FittedState<T>) -> Self {
        state.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::UnknownPolicy;
    use crate::vocab::Vocabulary;

    fn spec<T: IndexType>(
        name: &str,
        tokens: &[&str],
        bucket: bool,
    ) -> ColumnSpec<T> {
        ColumnSpec {
            name: name.into(),
            categories: Vocabulary::from_tokens(
                tokens.iter().map(|&t| t.into()).collect(),
            )
            .unwrap(),
            policy: if bucket {
                UnknownPolicy::InfrequentBucket
            } else {
                UnknownPolicy::Error
            },
            bucket,
        }
    }

    #[test]
    fn test_offsets_and_width() {
        type T = u32;

        let state = FittedState::<T>::init(vec![
            spec("size", &["S", "M"], false),
            spec("color", &["red", "blue", "green"], true),
        ])
        .unwrap();

        assert_eq!(state.n_columns(), 2);
        assert_eq!(state.offsets(), &[0, 2]);
        assert_eq!(state.width(), 6);
    }

    #[test]
    fn test_width_overflow() {
        use crate::category::CategoryToken;

        // 65536 categories fit u16 indices; the reserved bucket pushes
        // the final offset past u16::MAX.
        let wide: Vec<CategoryToken> =
            (0..=u16::MAX as i64).map(CategoryToken::Int).collect();

        let spec = ColumnSpec::<u16> {
            name: "wide".into(),
            categories: Vocabulary::from_tokens(wide).unwrap(),
            policy: UnknownPolicy::InfrequentBucket,
            bucket: true,
        };

        assert!(matches!(
            FittedState::init(vec![spec]),
            Err(HotcolError::IndexOverflow { value: 65536 })
        ));
    }

    #[test]
    fn test_check_table() {
        type T = u32;

        let state = FittedState::<T>::init(vec![
            spec("size", &["S", "M"], false),
            spec("color", &["red"], false),
        ])
        .unwrap();

        let good = Table::from_columns(vec![
            ("size", vec!["S".into()]),
            ("color", vec!["red".into()]),
        ])
        .unwrap();
        assert!(state.check_table(&good).is_ok());

        let reordered = Table::from_columns(vec![
            ("color", vec!["red".into()]),
            ("size", vec!["S".into()]),
        ])
        .unwrap();
        assert!(matches!(
            state.check_table(&reordered),
            Err(HotcolError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn test_check_width() {
        type T = u32;

        let state =
            FittedState::<T>::init(vec![spec("size", &["S", "M"], false)])
                .unwrap();

        assert!(state.check_width(2).is_ok());
        assert!(matches!(
            state.check_width(3),
            Err(HotcolError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        type T = u32;

        let state = FittedState::<T>::init(vec![
            spec("size", &["S", "M"], false),
            spec("color", &["red", "blue"], true),
        ])
        .unwrap();

        let text = serde_json::to_string(&state).unwrap();
        let reloaded: FittedState<T> = serde_json::from_str(&text).unwrap();

        assert_eq!(reloaded, state);
        assert_eq!(reloaded.offsets(), state.offsets());
    }
}
