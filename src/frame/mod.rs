//! Column-oriented table.
//!
//! A [`DataFrame`] is a thin façade over a [`ColumnStore`]: an ordered list of named,
//! equal-length columns, each either numeric or categorical.
//!
//! - `add_column`, `drop_column` and `encode_binary` mutate the table in place and leave it
//!   unchanged when they fail.
//! - `filter` and `head` return a new table; the source is never modified.
//! - `to_matrix` copies numeric columns into a [`Matrix`].
//!
//! ```rust
//! use rust_tabular_ml::frame::DataFrame;
//! use rust_tabular_ml::types::Cell;
//!
//! let mut df = DataFrame::with_column("id", vec![1.0, 2.0, 3.0]).unwrap();
//! df.add_column("smoker", vec!["yes", "no", "yes"]).unwrap();
//! df.encode_binary("smoker", "yes", "no").unwrap();
//!
//! let smokers = df.filter("smoker", |v| v == Cell::Number(1.0)).unwrap();
//! assert_eq!(smokers.rows(), 2);
//!
//! let x = df.to_matrix(&["id", "smoker"]).unwrap();
//! assert_eq!(x.as_slice(), &[1.0, 1.0, 2.0, 0.0, 3.0, 1.0]);
//! ```

mod display;
pub mod store;

use std::collections::BTreeSet;

use crate::error::{DataError, DataResult};
use crate::index::resolve_axis_index;
use crate::matrix::Matrix;
use crate::types::{Cell, Column, ColumnData, ColumnKind};

pub use display::DISPLAY_MAX_ROWS;
pub use store::ColumnStore;

/// Number of rows returned by [`DataFrame::head_default`].
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Identifies a column by name or by (possibly negative) position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Name(String),
    Position(isize),
}

impl From<&str> for ColumnRef {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<&String> for ColumnRef {
    fn from(s: &String) -> Self {
        Self::Name(s.clone())
    }
}

impl From<String> for ColumnRef {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<isize> for ColumnRef {
    fn from(i: isize) -> Self {
        Self::Position(i)
    }
}

impl From<i32> for ColumnRef {
    fn from(i: i32) -> Self {
        Self::Position(i as isize)
    }
}

impl From<usize> for ColumnRef {
    fn from(i: usize) -> Self {
        Self::Position(i as isize)
    }
}

/// In-memory table of named, typed columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    store: ColumnStore,
}

impl DataFrame {
    /// Create an empty table (no columns, no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with one initial column.
    ///
    /// `values` may be typed storage (`Vec<f64>`, `Vec<&str>`, `Vec<String>`) or a
    /// `Vec<Value>`, in which case the column is numeric iff every value is a number.
    pub fn with_column(name: &str, values: impl Into<ColumnData>) -> DataResult<Self> {
        let mut df = Self::new();
        df.add_column(name, values)?;
        Ok(df)
    }

    /// Create a table from already-built columns.
    pub fn from_columns(columns: Vec<Column>) -> DataResult<Self> {
        for c in &columns {
            check_name(&c.name)?;
        }
        Ok(Self {
            store: ColumnStore::from_columns(columns)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.store.rows()
    }

    pub fn cols(&self) -> usize {
        self.store.len()
    }

    /// `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Column names in insertion order.
    pub fn get_column_names(&self) -> Vec<&str> {
        self.store.names().collect()
    }

    /// Iterate columns in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.store.iter()
    }

    pub fn column(&self, name: &str) -> DataResult<&Column> {
        self.store
            .get(name)
            .ok_or_else(|| DataError::key_not_found(name))
    }

    pub fn column_kind(&self, name: &str) -> DataResult<ColumnKind> {
        self.column(name).map(Column::kind)
    }

    /// Append a column.
    ///
    /// Fails with [`DataError::InvalidArgument`] for an empty or duplicate name, or if the
    /// table already has columns and `values` has a different length.
    pub fn add_column(&mut self, name: &str, values: impl Into<ColumnData>) -> DataResult<()> {
        check_name(name)?;
        self.store.push(Column::new(name, values))
    }

    /// Remove a column, returning it. Fails with [`DataError::KeyNotFound`] if absent.
    pub fn drop_column(&mut self, name: &str) -> DataResult<Column> {
        self.store.remove(name)
    }

    /// Read one cell.
    ///
    /// `row` may be negative. The column is located by name ([`DataError::KeyNotFound`] if
    /// absent) or by position ([`DataError::IndexOutOfRange`] if outside the table).
    pub fn at(&self, row: isize, column: impl Into<ColumnRef>) -> DataResult<Cell<'_>> {
        let column = match column.into() {
            ColumnRef::Name(name) => self
                .store
                .get(&name)
                .ok_or_else(|| DataError::key_not_found(name))?,
            ColumnRef::Position(i) => {
                let idx = resolve_axis_index(i, self.cols(), "column")?;
                self.store
                    .get_at(idx)
                    .ok_or_else(|| DataError::key_not_found(i.to_string()))?
            }
        };
        let r = resolve_axis_index(row, self.rows(), "row")?;
        column
            .data
            .get(r)
            .ok_or(DataError::IndexOutOfRange {
                index: row,
                len: self.rows(),
                axis: "row",
            })
    }

    /// Return a new table holding only the rows where `predicate` returns `true` for the value
    /// in `column`.
    ///
    /// All columns are kept and rows keep their relative order. The source table is unchanged.
    pub fn filter<F>(&self, column: &str, mut predicate: F) -> DataResult<DataFrame>
    where
        F: FnMut(Cell<'_>) -> bool,
    {
        let target = self.column(column)?;
        let keep: Vec<usize> = (0..self.rows())
            .filter(|&r| target.data.get(r).is_some_and(&mut predicate))
            .collect();

        Ok(Self {
            store: self.store.map_data(|d| d.take(&keep)),
        })
    }

    /// Replace a categorical column with `1.0` for `true_label` and `0.0` for `false_label`.
    ///
    /// Any other value (or a column that is already numeric) fails with
    /// [`DataError::EncodingConstraintViolation`] and leaves the column as it was.
    pub fn encode_binary(&mut self, column: &str, true_label: &str, false_label: &str) -> DataResult<()> {
        let idx = self
            .store
            .position(column)
            .ok_or_else(|| DataError::key_not_found(column))?;
        let encoded = {
            let values = categorical_values(self.store.get_at(idx), column)?;
            let mut out = Vec::with_capacity(values.len());
            for (row, v) in values.iter().enumerate() {
                if v == true_label {
                    out.push(1.0);
                } else if v == false_label {
                    out.push(0.0);
                } else {
                    return Err(DataError::EncodingConstraintViolation {
                        column: column.to_string(),
                        message: format!(
                            "row {row} value '{v}' matches neither '{true_label}' nor '{false_label}'"
                        ),
                    });
                }
            }
            out
        };
        self.store.replace_data(idx, ColumnData::Numeric(encoded));
        Ok(())
    }

    /// Binary-encode a categorical column holding exactly two distinct labels.
    ///
    /// The lexicographically smaller label becomes `0.0` and the larger `1.0`. Returns the
    /// labels as `[zero_label, one_label]`.
    pub fn encode_binary_auto(&mut self, column: &str) -> DataResult<[String; 2]> {
        let idx = self
            .store
            .position(column)
            .ok_or_else(|| DataError::key_not_found(column))?;
        let values = categorical_values(self.store.get_at(idx), column)?;
        let distinct: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let [zero, one] = distinct.as_slice() else {
            return Err(DataError::EncodingConstraintViolation {
                column: column.to_string(),
                message: format!(
                    "expected exactly 2 distinct categories, found {}",
                    distinct.len()
                ),
            });
        };
        let (zero, one) = (zero.to_string(), one.to_string());
        self.encode_binary(column, &one, &zero)?;
        Ok([zero, one])
    }

    /// Copy the named numeric columns into a `rows x names.len()` matrix.
    ///
    /// Column `j` of the result is `names[j]`. Fails with [`DataError::KeyNotFound`] for an
    /// absent name and [`DataError::InvalidArgument`] for a categorical column.
    pub fn to_matrix<S: AsRef<str>>(&self, names: &[S]) -> DataResult<Matrix> {
        let mut sources: Vec<&[f64]> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            match &self.column(name)?.data {
                ColumnData::Numeric(v) => sources.push(v),
                ColumnData::Categorical(_) => {
                    return Err(DataError::invalid_argument(format!(
                        "column '{name}' is categorical; encode it before converting to a matrix"
                    )));
                }
            }
        }

        let (rows, cols) = (self.rows(), names.len());
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            data.extend(sources.iter().map(|col| col[r]));
        }
        Matrix::from_vec(rows, cols, data)
    }

    /// Return a new table with the first `min(n, rows)` rows.
    pub fn head(&self, n: usize) -> DataFrame {
        let n = n.min(self.rows());
        Self {
            store: self.store.map_data(|d| d.prefix(n)),
        }
    }

    /// [`DataFrame::head`] with [`DEFAULT_HEAD_ROWS`].
    pub fn head_default(&self) -> DataFrame {
        self.head(DEFAULT_HEAD_ROWS)
    }
}

fn check_name(name: &str) -> DataResult<()> {
    if name.is_empty() {
        return Err(DataError::invalid_argument("column name must not be empty"));
    }
    Ok(())
}

fn categorical_values<'a>(column: Option<&'a Column>, name: &str) -> DataResult<&'a [String]> {
    match column.map(|c| &c.data) {
        Some(ColumnData::Categorical(v)) => Ok(v),
        Some(ColumnData::Numeric(_)) => Err(DataError::EncodingConstraintViolation {
            column: name.to_string(),
            message: "column is already numeric".to_string(),
        }),
        None => Err(DataError::key_not_found(name)),
    }
}
