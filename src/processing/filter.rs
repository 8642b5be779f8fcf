//! Row filtering for [`crate::frame::DataFrame`].

use crate::error::DataResult;
use crate::frame::DataFrame;
use crate::types::Cell;

/// Returns a new [`DataFrame`] containing only rows for which `predicate` returns `true` on the
/// value in `column`.
///
/// This is a convenience wrapper around [`DataFrame::filter`].
pub fn filter<F>(df: &DataFrame, column: &str, predicate: F) -> DataResult<DataFrame>
where
    F: FnMut(Cell<'_>) -> bool,
{
    df.filter(column, predicate)
}
