//! Core data model types for tables.
//!
//! A [`crate::frame::DataFrame`] is an ordered list of [`Column`]s. Each column stores its values
//! as a [`ColumnData`], which is either all-numeric or all-categorical; there are no mixed-type
//! columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::display::format_number;

/// Logical kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// 64-bit floating point values.
    Numeric,
    /// UTF-8 string labels.
    Categorical,
}

/// An owned cell value, used when building columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A borrowed view of one cell, as returned by [`crate::frame::DataFrame::at`] and passed to
/// filter predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> Cell<'a> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(*s),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(v) => Value::Number(*v),
            Self::Text(s) => Value::Text((*s).to_string()),
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq<f64> for Cell<'_> {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Self::Number(v) if v == other)
    }
}

impl PartialEq<&str> for Cell<'_> {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Text(s) if s == other)
    }
}

/// Column storage: a tagged variant with exactly two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    /// Build column storage from owned values, inferring the kind.
    ///
    /// The result is [`ColumnData::Numeric`] if every value is a number (including the empty
    /// case), otherwise [`ColumnData::Categorical`] with numbers rendered as text.
    pub fn from_values(values: Vec<Value>) -> Self {
        if values.iter().all(|v| matches!(v, Value::Number(_))) {
            return Self::Numeric(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Number(n) => Some(n),
                        Value::Text(_) => None,
                    })
                    .collect(),
            );
        }
        Self::Categorical(
            values
                .into_iter()
                .map(|v| match v {
                    Value::Number(n) => format_number(n),
                    Value::Text(s) => s,
                })
                .collect(),
        )
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Numeric(_) => ColumnKind::Numeric,
            Self::Categorical(_) => ColumnKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the value at `row`, if in bounds.
    pub fn get(&self, row: usize) -> Option<Cell<'_>> {
        match self {
            Self::Numeric(v) => v.get(row).map(|n| Cell::Number(*n)),
            Self::Categorical(v) => v.get(row).map(|s| Cell::Text(s.as_str())),
        }
    }

    /// Copy the values at `rows` (in that order) into new storage of the same kind.
    pub(crate) fn take(&self, rows: &[usize]) -> Self {
        match self {
            Self::Numeric(v) => Self::Numeric(rows.iter().map(|&r| v[r]).collect()),
            Self::Categorical(v) => Self::Categorical(rows.iter().map(|&r| v[r].clone()).collect()),
        }
    }

    /// Copy the first `n` values into new storage of the same kind.
    pub(crate) fn prefix(&self, n: usize) -> Self {
        match self {
            Self::Numeric(v) => Self::Numeric(v[..n].to_vec()),
            Self::Categorical(v) => Self::Categorical(v[..n].to_vec()),
        }
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        Self::Numeric(v)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self {
        Self::Categorical(v)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(v: Vec<&str>) -> Self {
        Self::Categorical(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Value>> for ColumnData {
    fn from(v: Vec<Value>) -> Self {
        Self::from_values(v)
    }
}

/// A single named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within its table.
    pub name: String,
    /// Column values.
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: impl Into<ColumnData>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
