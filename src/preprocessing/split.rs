//! Seeded train/test partitioning.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{DataError, DataResult};
use crate::matrix::Matrix;

/// Fraction of rows placed in the test partition by default.
pub const DEFAULT_TEST_SIZE: f64 = 0.2;
/// Shuffle seed used by default.
pub const DEFAULT_SEED: u64 = 42;

/// Result of [`train_test_split`]. Rows of `x_*` and `y_*` stay paired.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub x_train: Matrix,
    pub x_test: Matrix,
    pub y_train: Matrix,
    pub y_test: Matrix,
}

/// Shuffle the rows of `x` and `y` together and split them into train and test partitions.
///
/// The test partition has `floor(rows * test_size)` rows; the rest go to training. The shuffle is
/// deterministic for a given `seed`.
pub fn train_test_split(x: &Matrix, y: &Matrix, test_size: f64, seed: u64) -> DataResult<Split> {
    if x.rows() != y.rows() {
        return Err(DataError::DimensionMismatch {
            op: "train_test_split",
            left: x.shape(),
            right: y.shape(),
        });
    }
    if !(0.0..=1.0).contains(&test_size) {
        return Err(DataError::invalid_argument(format!(
            "test_size must be within [0, 1], got {test_size}"
        )));
    }

    let total = x.rows();
    let test_rows = (total as f64 * test_size).floor() as usize;
    let train_rows = total - test_rows;

    let mut indices: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let (train_idx, test_idx) = indices.split_at(train_rows);

    Ok(Split {
        x_train: gather_rows(x, train_idx)?,
        x_test: gather_rows(x, test_idx)?,
        y_train: gather_rows(y, train_idx)?,
        y_test: gather_rows(y, test_idx)?,
    })
}

fn gather_rows(m: &Matrix, rows: &[usize]) -> DataResult<Matrix> {
    let mut data = Vec::with_capacity(rows.len() * m.cols());
    for &r in rows {
        data.extend_from_slice(m.row_slice(r));
    }
    Matrix::from_vec(rows.len(), m.cols(), data)
}
