//! Ordered, name-unique column storage backing [`super::DataFrame`].

use crate::error::{DataError, DataResult};
use crate::types::{Column, ColumnData};

/// An ordered collection of equal-length, uniquely named columns.
///
/// Invariants (checked on every insertion):
///
/// - every column's length equals [`ColumnStore::rows`];
/// - no two columns share a name;
/// - `rows` is `0` when there are no columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStore {
    columns: Vec<Column>,
    rows: usize,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from columns, validating lengths and names in order.
    pub fn from_columns(columns: Vec<Column>) -> DataResult<Self> {
        let mut store = Self::new();
        for column in columns {
            store.push(column)?;
        }
        Ok(store)
    }

    /// Number of rows shared by every column.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Iterate column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the position of a column by name, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn get_at(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    /// Append a column.
    ///
    /// Fails with [`DataError::InvalidArgument`] if the name is taken or, when at least one
    /// column exists, if the length differs from [`ColumnStore::rows`]. The store is unchanged
    /// on failure.
    pub fn push(&mut self, column: Column) -> DataResult<()> {
        if self.position(&column.name).is_some() {
            return Err(DataError::invalid_argument(format!(
                "column '{}' already exists",
                column.name
            )));
        }
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(DataError::invalid_argument(format!(
                "column '{}' has {} values but the table has {} rows",
                column.name,
                column.len(),
                self.rows
            )));
        }

        if self.columns.is_empty() {
            self.rows = column.len();
        }
        self.columns.push(column);
        Ok(())
    }

    /// Remove and return a column by name.
    ///
    /// Removing the last column resets the row count to `0`.
    pub fn remove(&mut self, name: &str) -> DataResult<Column> {
        let idx = self
            .position(name)
            .ok_or_else(|| DataError::key_not_found(name))?;
        let column = self.columns.remove(idx);
        if self.columns.is_empty() {
            self.rows = 0;
        }
        Ok(column)
    }

    /// Swap in new storage for the column at `idx`, which must keep the same length.
    pub(crate) fn replace_data(&mut self, idx: usize, data: ColumnData) {
        debug_assert_eq!(data.len(), self.rows);
        self.columns[idx].data = data;
    }

    /// Build a new store with every column mapped through `f`.
    ///
    /// `f` must return storage of equal length for every column.
    pub(crate) fn map_data(&self, mut f: impl FnMut(&ColumnData) -> ColumnData) -> Self {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                data: f(&c.data),
            })
            .collect();
        let rows = columns.first().map_or(0, Column::len);
        Self { columns, rows }
    }
}
