//! Index resolution shared by [`crate::matrix::Matrix`] and [`crate::frame::DataFrame`].
//!
//! Integer locators accept negative values, which count back from the end of the axis
//! (`-1` is the last element). Range locators are half-open (`start..stop`) and either end may be
//! left open. Both are normalized against an axis length before any storage is touched.
//!
//! ```rust
//! use rust_tabular_ml::index::{normalize_index, normalize_range, SliceRange};
//!
//! assert_eq!(normalize_index(-1, 3).unwrap(), 2);
//! assert_eq!(normalize_range(SliceRange::new(Some(-2), None), 5).unwrap(), 3..5);
//! assert!(normalize_index(3, 3).is_err());
//! ```

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};
use std::str::FromStr;

use crate::error::{DataError, DataResult};

/// A half-open `[start, stop)` range where either end may be open.
///
/// An open start means `0`; an open stop means "the axis length".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceRange {
    pub start: Option<isize>,
    pub stop: Option<isize>,
}

impl SliceRange {
    pub fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self { start, stop }
    }

    /// The full extent of an axis (`:`).
    pub fn full() -> Self {
        Self::default()
    }
}

impl fmt::Display for SliceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.start {
            write!(f, "{s}")?;
        }
        write!(f, ":")?;
        if let Some(s) = self.stop {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// A single-axis locator: one element, or a half-open range of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    At(isize),
    Range(SliceRange),
}

impl Locator {
    /// Returns `true` for [`Locator::Range`].
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Resolve this locator into a concrete `start..stop` range over an axis of length `dim`.
    ///
    /// A single index `i` resolves to `i..i + 1`.
    pub fn resolve(&self, dim: usize, axis: &'static str) -> DataResult<Range<usize>> {
        match *self {
            Self::At(i) => {
                let i = resolve_axis_index(i, dim, axis)?;
                Ok(i..i + 1)
            }
            Self::Range(r) => resolve_axis_range(r, dim, axis),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(i) => write!(f, "{i}"),
            Self::Range(r) => write!(f, "{r}"),
        }
    }
}

impl From<isize> for Locator {
    fn from(i: isize) -> Self {
        Self::At(i)
    }
}

impl From<i32> for Locator {
    fn from(i: i32) -> Self {
        Self::At(i as isize)
    }
}

impl From<SliceRange> for Locator {
    fn from(r: SliceRange) -> Self {
        Self::Range(r)
    }
}

impl From<Range<isize>> for Locator {
    fn from(r: Range<isize>) -> Self {
        Self::Range(SliceRange::new(Some(r.start), Some(r.end)))
    }
}

impl From<RangeFrom<isize>> for Locator {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::Range(SliceRange::new(Some(r.start), None))
    }
}

impl From<RangeTo<isize>> for Locator {
    fn from(r: RangeTo<isize>) -> Self {
        Self::Range(SliceRange::new(None, Some(r.end)))
    }
}

impl From<RangeFull> for Locator {
    fn from(_: RangeFull) -> Self {
        Self::Range(SliceRange::full())
    }
}

/// Parses `"3"`, `"-1"`, `"0:2"`, `":"`, `"1:"` and `":-1"`.
///
/// Anything else (non-integers, stepped slices like `"0:4:2"`, empty input) is rejected with
/// [`DataError::InvalidIndexKind`].
impl FromStr for Locator {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DataError::InvalidIndexKind {
                message: "empty locator".to_string(),
            });
        }

        if !s.contains(':') {
            return parse_bound(s).map(Self::At);
        }

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(DataError::InvalidIndexKind {
                message: format!("'{s}' is not a half-open range (expected start:stop)"),
            });
        }
        let start = parse_optional_bound(parts[0])?;
        let stop = parse_optional_bound(parts[1])?;
        Ok(Self::Range(SliceRange::new(start, stop)))
    }
}

/// A two-axis locator (`row, col`) as accepted by [`crate::matrix::Matrix::index_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub row: Locator,
    pub col: Locator,
}

impl IndexSpec {
    pub fn new(row: impl Into<Locator>, col: impl Into<Locator>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }
}

impl FromStr for IndexSpec {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(DataError::InvalidIndexKind {
                message: format!(
                    "matrix index must name exactly 2 axes (row, col), got {} in '{s}'",
                    parts.len()
                ),
            });
        }
        Ok(Self {
            row: parts[0].parse()?,
            col: parts[1].parse()?,
        })
    }
}

fn parse_bound(s: &str) -> DataResult<isize> {
    s.trim()
        .parse::<isize>()
        .map_err(|_| DataError::InvalidIndexKind {
            message: format!("'{s}' is neither an integer nor a range"),
        })
}

fn parse_optional_bound(s: &str) -> DataResult<Option<isize>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_bound(s).map(Some)
    }
}

/// Normalize a possibly-negative index against an axis of length `dim`.
///
/// Negative values are shifted by `dim` once; the result must satisfy `0 <= i < dim`.
pub fn normalize_index(i: isize, dim: usize) -> DataResult<usize> {
    resolve_axis_index(i, dim, "axis")
}

/// Normalize a half-open range against an axis of length `dim`.
///
/// Each explicit endpoint is negative-normalized independently and must land in `[0, dim]`;
/// an open start is `0` and an open stop is `dim`. The result always satisfies
/// `0 <= start <= stop <= dim`.
pub fn normalize_range(range: SliceRange, dim: usize) -> DataResult<Range<usize>> {
    resolve_axis_range(range, dim, "axis")
}

pub(crate) fn resolve_axis_index(i: isize, dim: usize, axis: &'static str) -> DataResult<usize> {
    let n = shift_negative(i, dim);
    if n < 0 || n as usize >= dim {
        return Err(DataError::IndexOutOfRange { index: i, len: dim, axis });
    }
    Ok(n as usize)
}

pub(crate) fn resolve_axis_range(
    range: SliceRange,
    dim: usize,
    axis: &'static str,
) -> DataResult<Range<usize>> {
    let start = match range.start {
        Some(s) => resolve_bound(s, dim, axis)?,
        None => 0,
    };
    let stop = match range.stop {
        Some(s) => resolve_bound(s, dim, axis)?,
        None => dim,
    };
    if start > stop {
        return Err(DataError::IndexOutOfRange {
            index: range.start.unwrap_or(0),
            len: dim,
            axis,
        });
    }
    Ok(start..stop)
}

fn resolve_bound(b: isize, dim: usize, axis: &'static str) -> DataResult<usize> {
    let n = shift_negative(b, dim);
    if n < 0 || n as usize > dim {
        return Err(DataError::IndexOutOfRange { index: b, len: dim, axis });
    }
    Ok(n as usize)
}

fn shift_negative(i: isize, dim: usize) -> isize {
    if i < 0 { i.saturating_add(dim as isize) } else { i }
}
