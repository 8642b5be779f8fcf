//! Evaluation metrics for regression and binary classification.
//!
//! Every function compares the first column of `y_true` against the first column of `y_pred`.
//! Both must have the same number of rows (at least one), and each must have at least one column.
//! For the classification scores the positive class is `1.0`.

use crate::error::{DataError, DataResult};
use crate::matrix::Matrix;

/// Mean of squared differences.
pub fn mean_squared_error(y_true: &Matrix, y_pred: &Matrix) -> DataResult<f64> {
    let pairs = paired("mean_squared_error", y_true, y_pred)?;
    let n = pairs.len() as f64;
    Ok(pairs.into_iter().map(|(t, p)| (t - p) * (t - p)).sum::<f64>() / n)
}

/// Coefficient of determination, `1 - ss_res / ss_tot`.
///
/// A constant `y_true` gives `ss_tot == 0`; the result is then `NaN` or `-inf`, following IEEE
/// division.
pub fn r2_score(y_true: &Matrix, y_pred: &Matrix) -> DataResult<f64> {
    let pairs = paired("r2_score", y_true, y_pred)?;
    let mean = pairs.iter().map(|(t, _)| t).sum::<f64>() / pairs.len() as f64;

    let (mut ss_res, mut ss_tot) = (0.0, 0.0);
    for (t, p) in pairs {
        ss_res += (t - p) * (t - p);
        ss_tot += (t - mean) * (t - mean);
    }
    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of rows where prediction and truth are exactly equal.
pub fn accuracy_score(y_true: &Matrix, y_pred: &Matrix) -> DataResult<f64> {
    let pairs = paired("accuracy_score", y_true, y_pred)?;
    let correct = pairs.iter().filter(|(t, p)| t == p).count();
    Ok(correct as f64 / pairs.len() as f64)
}

/// `tp / (tp + fp)`, or `0.0` when nothing was predicted positive.
pub fn precision_score(y_true: &Matrix, y_pred: &Matrix) -> DataResult<f64> {
    let c = confusion("precision_score", y_true, y_pred)?;
    Ok(ratio(c.tp, c.tp + c.fp))
}

/// `tp / (tp + fn)`, or `0.0` when there are no positive rows.
pub fn recall_score(y_true: &Matrix, y_pred: &Matrix) -> DataResult<f64> {
    let c = confusion("recall_score", y_true, y_pred)?;
    Ok(ratio(c.tp, c.tp + c.fn_))
}

/// Harmonic mean of precision and recall, or `0.0` when both are zero.
pub fn f1_score(y_true: &Matrix, y_pred: &Matrix) -> DataResult<f64> {
    let c = confusion("f1_score", y_true, y_pred)?;
    let p = ratio(c.tp, c.tp + c.fp);
    let r = ratio(c.tp, c.tp + c.fn_);
    Ok(if p + r > 0.0 { 2.0 * p * r / (p + r) } else { 0.0 })
}

struct Confusion {
    tp: usize,
    fp: usize,
    fn_: usize,
}

fn confusion(op: &'static str, y_true: &Matrix, y_pred: &Matrix) -> DataResult<Confusion> {
    let mut c = Confusion { tp: 0, fp: 0, fn_: 0 };
    for (t, p) in paired(op, y_true, y_pred)? {
        match (t == 1.0, p == 1.0) {
            (true, true) => c.tp += 1,
            (false, true) => c.fp += 1,
            (true, false) => c.fn_ += 1,
            (false, false) => {}
        }
    }
    Ok(c)
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

/// Validates shapes and returns `(true, pred)` pairs from column 0.
fn paired(op: &'static str, y_true: &Matrix, y_pred: &Matrix) -> DataResult<Vec<(f64, f64)>> {
    if y_true.rows() != y_pred.rows() || y_true.cols() == 0 || y_pred.cols() == 0 {
        return Err(DataError::DimensionMismatch {
            op,
            left: y_true.shape(),
            right: y_pred.shape(),
        });
    }
    if y_true.rows() == 0 {
        return Err(DataError::invalid_argument(format!("{op} requires at least one row")));
    }
    Ok((0..y_true.rows())
        .map(|r| (y_true.row_slice(r)[0], y_pred.row_slice(r)[0]))
        .collect())
}
