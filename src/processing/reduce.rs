//! Reduction operations for [`crate::frame::DataFrame`].

use crate::error::{DataError, DataResult};
use crate::frame::DataFrame;
use crate::types::ColumnData;

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows. Works on any column kind.
    Count,
    /// Sum of numeric values.
    Sum,
    /// Minimum numeric value.
    Min,
    /// Maximum numeric value.
    Max,
    /// Arithmetic mean of numeric values.
    Mean,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Fails with [`DataError::KeyNotFound`] if `column` does not exist.
/// - For `Count`, always returns `Some(rows)`.
/// - For the numeric ops, fails with [`DataError::InvalidArgument`] on a categorical column and
///   returns `None` if the column has no rows.
pub fn reduce(df: &DataFrame, column: &str, op: ReduceOp) -> DataResult<Option<f64>> {
    let col = df.column(column)?;

    if op == ReduceOp::Count {
        return Ok(Some(col.len() as f64));
    }

    let values = match &col.data {
        ColumnData::Numeric(v) => v,
        ColumnData::Categorical(_) => {
            return Err(DataError::invalid_argument(format!(
                "cannot apply {op:?} to categorical column '{column}'"
            )));
        }
    };
    if values.is_empty() {
        return Ok(None);
    }

    let out = match op {
        ReduceOp::Sum => values.iter().sum(),
        ReduceOp::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        ReduceOp::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        ReduceOp::Mean => values.iter().sum::<f64>() / values.len() as f64,
        ReduceOp::Count => values.len() as f64,
    };
    Ok(Some(out))
}
