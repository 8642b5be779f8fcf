//! Arithmetic on [`Matrix`]: element-wise add/subtract, scalar scaling, matrix product and
//! transposition.
//!
//! Every operation here returns a new matrix; operands are borrowed and left unchanged.
//!
//! `&a + &b`, `&a - &b` and `&a * &b` are shorthands for [`Matrix::add`], [`Matrix::subtract`] and
//! [`Matrix::multiply`], so they yield a [`DataResult`]. Scaling by an `f64` cannot fail and yields
//! a [`Matrix`] directly.

use std::ops::{Add, Mul, Sub};

use crate::error::{DataError, DataResult};

use super::Matrix;

/// Default tile edge for [`Matrix::transpose`] (a `32 x 32` tile of `f64` is 8 KiB).
pub const TRANSPOSE_BLOCK: usize = 32;

impl Matrix {
    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> DataResult<()> {
        if self.shape() != other.shape() {
            return Err(DataError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Element-wise sum. Shapes must be identical.
    pub fn add(&self, other: &Matrix) -> DataResult<Matrix> {
        self.check_same_shape(other, "addition")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference. Shapes must be identical.
    pub fn subtract(&self, other: &Matrix) -> DataResult<Matrix> {
        self.check_same_shape(other, "subtraction")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| v * scalar).collect(),
        }
    }

    /// Standard matrix product `self * other`.
    ///
    /// Requires `self.cols() == other.rows()`; the result has shape
    /// `(self.rows(), other.cols())`. The loop order is `i, k, j` so the inner loop walks both
    /// `other` and the output row contiguously.
    pub fn multiply(&self, other: &Matrix) -> DataResult<Matrix> {
        if self.cols != other.rows {
            return Err(DataError::DimensionMismatch {
                op: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let (n, m, p) = (self.rows, self.cols, other.cols);
        let mut out = Matrix::try_zeros(n, p)?;
        for i in 0..n {
            let out_row = &mut out.data[i * p..(i + 1) * p];
            for k in 0..m {
                let a = self.data[i * m + k];
                let b_row = &other.data[k * p..(k + 1) * p];
                for (o, &b) in out_row.iter_mut().zip(b_row) {
                    *o += a * b;
                }
            }
        }
        Ok(out)
    }

    /// Transpose using `TRANSPOSE_BLOCK x TRANSPOSE_BLOCK` tiles.
    pub fn transpose(&self) -> Matrix {
        self.transpose_tiled(TRANSPOSE_BLOCK)
    }

    /// Transpose with an explicit tile edge.
    ///
    /// The result is identical to an element-by-element transpose for every `block >= 1`;
    /// tiling only changes the traversal order. `block == 0` is rejected.
    pub fn transpose_blocked(&self, block: usize) -> DataResult<Matrix> {
        if block == 0 {
            return Err(DataError::invalid_argument("transpose block size must be > 0"));
        }
        Ok(self.transpose_tiled(block))
    }

    fn transpose_tiled(&self, block: usize) -> Matrix {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![0.0; self.data.len()];

        for ib in (0..rows).step_by(block) {
            let i_end = ib.saturating_add(block).min(rows);
            for jb in (0..cols).step_by(block) {
                let j_end = jb.saturating_add(block).min(cols);
                for i in ib..i_end {
                    for j in jb..j_end {
                        data[j * rows + i] = self.data[i * cols + j];
                    }
                }
            }
        }

        Matrix {
            rows: cols,
            cols: rows,
            data,
        }
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = DataResult<Matrix>;

    fn add(self, rhs: &Matrix) -> DataResult<Matrix> {
        Matrix::add(self, rhs)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = DataResult<Matrix>;

    fn sub(self, rhs: &Matrix) -> DataResult<Matrix> {
        self.subtract(rhs)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = DataResult<Matrix>;

    fn mul(self, rhs: &Matrix) -> DataResult<Matrix> {
        self.multiply(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[Vec<f64>]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn naive_transpose(a: &Matrix) -> Matrix {
        let mut out = Matrix::zeros(a.cols(), a.rows());
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                out.data[j * a.rows() + i] = a.data[i * a.cols() + j];
            }
        }
        out
    }

    #[test]
    fn addition_is_elementwise_and_leaves_operands() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(&[vec![10.0, 20.0], vec![30.0, 40.0]]);
        let c = a.add(&b).unwrap();
        assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.as_slice(), &[10.0, 20.0, 30.0, 40.0]);

        let zero = Matrix::zeros(2, 2);
        assert_eq!(a.add(&zero).unwrap(), a);
    }

    #[test]
    fn subtraction_is_elementwise() {
        let a = m(&[vec![10.0, 20.0], vec![30.0, 40.0]]);
        let b = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.subtract(&b).unwrap().as_slice(), &[9.0, 18.0, 27.0, 36.0]);

        let mut c = Matrix::zeros(2, 2);
        c.set(0, 0, 50.0).unwrap();
        assert_eq!(b.subtract(&c).unwrap().get(0, 0).unwrap(), -49.0);

        assert_eq!(a.subtract(&a).unwrap(), Matrix::zeros(2, 2));
    }

    #[test]
    fn elementwise_ops_reject_shape_mismatch() {
        let a = Matrix::zeros(2, 2);
        for other in [Matrix::zeros(3, 2), Matrix::zeros(2, 3)] {
            assert!(matches!(
                a.add(&other),
                Err(DataError::DimensionMismatch { op: "addition", .. })
            ));
            assert!(matches!(
                a.subtract(&other),
                Err(DataError::DimensionMismatch { op: "subtraction", .. })
            ));
        }
    }

    #[test]
    fn scalar_multiplication_in_either_order() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!((&a * 2.5).as_slice(), &[2.5, 5.0, 7.5, 10.0]);
        assert_eq!((3.0 * &a).as_slice(), &[3.0, 6.0, 9.0, 12.0]);
        assert_eq!((&a * -1.0).as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
        assert!((&a * 0.0).as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.clone() * 2.0, 2.0 * a);
    }

    #[test]
    fn multiply_rectangular() {
        let a = m(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn multiply_by_identity_and_dot_product() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.multiply(&Matrix::identity(2)).unwrap(), a);

        let v1 = m(&[vec![1.0, 2.0, 3.0]]);
        let v2 = v1.transpose();
        let dot = v1.multiply(&v2).unwrap();
        assert_eq!(dot.shape(), (1, 1));
        assert_eq!(dot.get(0, 0).unwrap(), 14.0);
    }

    #[test]
    fn multiply_rejects_inner_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            DataError::DimensionMismatch {
                op: "multiplication",
                left: (2, 3),
                right: (2, 2)
            }
        );
    }

    #[test]
    fn multiply_with_empty_inner_dimension_is_zero() {
        let a = Matrix::zeros(2, 0);
        let b = Matrix::zeros(0, 3);
        assert_eq!(a.multiply(&b).unwrap(), Matrix::zeros(2, 3));
    }

    #[test]
    fn multiply_rejects_unallocatable_product() {
        let huge = 1usize << (usize::BITS / 2);
        let a = Matrix::zeros(huge, 0);
        let b = Matrix::zeros(0, huge);
        assert!(matches!(a.multiply(&b), Err(DataError::InvalidArgument { .. })));
    }

    #[test]
    fn operators_on_matrix_pairs() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!((&a + &b).unwrap(), a.add(&b).unwrap());
        assert_eq!((&b - &a).unwrap().as_slice(), &[4.0, 4.0, 4.0, 4.0]);
        assert_eq!((&a * &b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);

        let wide = Matrix::zeros(2, 3);
        assert!(matches!(&a + &wide, Err(DataError::DimensionMismatch { op: "addition", .. })));
        assert!(matches!(&a - &wide, Err(DataError::DimensionMismatch { op: "subtraction", .. })));
        assert!((&a * &wide).is_ok());
        assert!(matches!(
            &wide * &a,
            Err(DataError::DimensionMismatch { op: "multiplication", .. })
        ));
    }

    #[test]
    fn transpose_swaps_shape_and_values() {
        let a = m(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(t.transpose(), a);

        let col = m(&[vec![10.0, 20.0, 30.0]]).transpose();
        assert_eq!(col.shape(), (3, 1));
        assert_eq!(col.as_slice(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn transpose_matches_naive_for_every_block_size() {
        // Shapes straddling tile edges: partial tiles on both axes.
        for (rows, cols) in [(0, 0), (0, 5), (1, 1), (7, 3), (33, 65), (64, 31)] {
            let data = (0..rows * cols).map(|v| v as f64 * 0.5 - 3.0).collect();
            let a = Matrix::from_vec(rows, cols, data).unwrap();
            let expected = naive_transpose(&a);
            for block in [1, 2, 5, 16, TRANSPOSE_BLOCK, 100] {
                let t = a.transpose_blocked(block).unwrap();
                assert_eq!(t, expected, "shape {rows}x{cols} block {block}");
                assert_eq!(t.transpose_blocked(block).unwrap(), a);
            }
        }
    }

    #[test]
    fn transpose_blocked_rejects_zero_block() {
        assert!(matches!(
            Matrix::zeros(2, 2).transpose_blocked(0),
            Err(DataError::InvalidArgument { .. })
        ));
    }

    #[cfg(feature = "deep_tests")]
    #[test]
    fn large_transpose_and_product() {
        let n = 1000;
        let data = (0..n * n).map(|v| (v % 97) as f64).collect();
        let a = Matrix::from_vec(n, n, data).unwrap();
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(a.multiply(&Matrix::identity(n)).unwrap(), a);
    }
}
