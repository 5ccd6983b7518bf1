//! # Tabular Input
//!
//! The engine's tabular input: named columns of
//! [`CategoryToken`] values, in a caller-defined column order. All
//! columns carry the same row count.

use compact_str::CompactString;

use crate::category::CategoryToken;
use crate::errors::{HCResult, HotcolError};

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<(CompactString, Vec<CategoryToken>)>,
    n_rows: usize,
}

impl Table {
    /// Build a table from ordered `(name, values)` columns.
    ///
    /// ## Arguments
    /// * `columns` - The named columns, in order.
    ///
    /// ## Returns
    /// The table, or [`HotcolError::ColumnLengthMismatch`] if column
    /// lengths differ.
    pub fn from_columns<N>(
        columns: Vec<(N, Vec<CategoryToken>)>,
    ) -> HCResult<Self>
    where
        N: Into<CompactString>,
    {
        let columns: Vec<(CompactString, Vec<CategoryToken>)> = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .collect();

        let n_rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for (name, values) in &columns {
            if values.len() != n_rows {
                return Err(HotcolError::ColumnLengthMismatch {
                    column: name.clone(),
                    expected: n_rows,
                    actual: values.len(),
                });
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Parse a table from JSON record objects, one object per row.
    ///
    /// Column order follows the first record; every record must carry
    /// exactly the same keys. Values are normalized through
    /// [`CategoryToken::from_json`].
    ///
    /// ## Arguments
    /// * `records` - The row objects.
    ///
    /// ## Returns
    /// The table; [`HotcolError::InvalidToken`] on non-categorical
    /// values, [`HotcolError::Parse`] on non-object records or ragged
    /// keys.
    pub fn from_json_records(records: &[serde_json::Value]) -> HCResult<Self> {
        let mut columns: Vec<(CompactString, Vec<CategoryToken>)> = Vec::new();

        for (row, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or_else(|| {
                HotcolError::Parse(format!("record {row} is not an object"))
            })?;

            if row == 0 {
                columns = object
                    .keys()
                    .map(|k| (k.as_str().into(), Vec::with_capacity(records.len())))
                    .collect();
            } else if object.len() != columns.len() {
                return Err(HotcolError::Parse(format!(
                    "record {row} has {} fields, expected {}",
                    object.len(),
                    columns.len()
                )));
            }

            for (name, values) in &mut columns {
                let value = object.get(name.as_str()).ok_or_else(|| {
                    HotcolError::Parse(format!(
                        "record {row} is missing field {name:?}"
                    ))
                })?;
                values.push(
                    CategoryToken::from_json(value)
                        .map_err(|e| e.in_column(name.clone()))?,
                );
            }
        }

        Self::from_columns(columns)
    }

    /// The number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// The number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The column names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// The `(name, values)` columns, in order.
    pub fn columns(&self) -> &[(CompactString, Vec<CategoryToken>)] {
        &self.columns
    }

    /// A column's values by position.
    pub fn values(
        &self,
        column: usize,
    ) -> &[CategoryToken] {
        &self.columns[column].1
    }
}
