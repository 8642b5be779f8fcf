//! Dense, row-major `f64` matrix.
//!
//! A [`Matrix`] owns a contiguous buffer of exactly `rows * cols` values where the element at
//! `(r, c)` lives at `data[r * cols + c]`. The shape never changes after construction.
//!
//! ## Copy semantics
//!
//! [`Matrix::set`] is the only operation that mutates a matrix in place. Everything else
//! (slicing through [`Matrix::index`], [`Matrix::get_row`], arithmetic in [`ops`], transposition)
//! allocates a fresh buffer for its result. A result never shares storage with its source, so
//! writing into a slice or a row copy leaves the original untouched.
//!
//! ```rust
//! use rust_tabular_ml::matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! let b = Matrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
//!
//! let mut row = a.get_row(-1).unwrap();
//! row.set(0, 0, 99.0).unwrap();
//! assert_eq!(a.get(1, 0).unwrap(), 4.0);
//! ```

pub(crate) mod display;
pub mod ops;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};
use crate::index::{resolve_axis_index, IndexSpec, Locator};

pub use ops::TRANSPOSE_BLOCK;

/// Dense row-major matrix of `f64` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixParts")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Result of [`Matrix::index`]: a single element, or a copied sub-block.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Scalar(f64),
    Block(Matrix),
}

impl Selection {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Block(_) => None,
        }
    }

    pub fn into_block(self) -> Option<Matrix> {
        match self {
            Self::Scalar(_) => None,
            Self::Block(m) => Some(m),
        }
    }
}

impl Matrix {
    /// Create a zero-filled matrix from signed dimensions.
    ///
    /// Fails with [`DataError::InvalidArgument`] if either dimension is negative or the element
    /// count does not fit in memory.
    pub fn new(rows: isize, cols: isize) -> DataResult<Self> {
        if rows < 0 || cols < 0 {
            return Err(DataError::invalid_argument(format!(
                "matrix dimensions cannot be negative (got {rows}x{cols})"
            )));
        }
        Self::try_zeros(rows as usize, cols as usize)
    }

    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` elements cannot be allocated, like `vec!` does. Use
    /// [`Matrix::try_zeros`] for shapes that come from untrusted input.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        match Self::try_zeros(rows, cols) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible [`Matrix::zeros`].
    pub fn try_zeros(rows: usize, cols: usize) -> DataResult<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Create an `n x n` identity matrix. Panics like [`Matrix::zeros`].
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Fails with [`DataError::InvalidArgument`] unless `data.len() == rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> DataResult<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(DataError::invalid_argument(format!(
                "buffer of length {} cannot back a {rows}x{cols} matrix",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a slice of equal-length rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> DataResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(DataError::invalid_argument(format!(
                    "row {i} has {} values, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the backing buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Borrow row `r` (already normalized) as a slice.
    pub(crate) fn row_slice(&self, r: usize) -> &[f64] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    fn offset(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    fn resolve(&self, r: isize, c: isize) -> DataResult<usize> {
        let r = resolve_axis_index(r, self.rows, "row")?;
        let c = resolve_axis_index(c, self.cols, "column")?;
        Ok(self.offset(r, c))
    }

    /// Read the element at `(r, c)`; negative coordinates count from the end.
    pub fn get(&self, r: isize, c: isize) -> DataResult<f64> {
        let i = self.resolve(r, c)?;
        Ok(self.data[i])
    }

    /// Overwrite the element at `(r, c)` in place; negative coordinates count from the end.
    pub fn set(&mut self, r: isize, c: isize, value: f64) -> DataResult<()> {
        let i = self.resolve(r, c)?;
        self.data[i] = value;
        Ok(())
    }

    /// Combined element / slice access.
    ///
    /// Two single indices return [`Selection::Scalar`]. If either locator is a range, the
    /// resolved sub-block is copied into a new matrix and returned as [`Selection::Block`];
    /// a single index on the other axis selects a one-wide band.
    pub fn index(&self, row: impl Into<Locator>, col: impl Into<Locator>) -> DataResult<Selection> {
        let (row, col) = (row.into(), col.into());
        if let (Locator::At(r), Locator::At(c)) = (row, col) {
            return self.get(r, c).map(Selection::Scalar);
        }

        let rr = row.resolve(self.rows, "row")?;
        let cr = col.resolve(self.cols, "column")?;
        let mut data = Vec::with_capacity(rr.len() * cr.len());
        for r in rr.clone() {
            data.extend_from_slice(&self.row_slice(r)[cr.clone()]);
        }
        Ok(Selection::Block(Self {
            rows: rr.len(),
            cols: cr.len(),
            data,
        }))
    }

    /// Like [`Matrix::index`], taking a textual `"row, col"` spec such as `"0:2, -1"`.
    ///
    /// Specs that do not name exactly two axes, or whose axes are neither integers nor
    /// `start:stop` ranges, fail with [`DataError::InvalidIndexKind`].
    pub fn index_str(&self, spec: &str) -> DataResult<Selection> {
        let spec: IndexSpec = spec.parse()?;
        self.index(spec.row, spec.col)
    }

    /// Copy row `idx` into a new `1 x cols` matrix; negative indices count from the end.
    pub fn get_row(&self, idx: isize) -> DataResult<Self> {
        let r = resolve_axis_index(idx, self.rows, "row")?;
        Ok(Self {
            rows: 1,
            cols: self.cols,
            data: self.row_slice(r).to_vec(),
        })
    }
}

/// `rows * cols`, rejecting shapes whose buffer could never be allocated.
fn element_count(rows: usize, cols: usize) -> DataResult<usize> {
    const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();
    rows.checked_mul(cols)
        .filter(|&n| n <= MAX_ELEMENTS)
        .ok_or_else(|| DataError::invalid_argument(format!("a {rows}x{cols} matrix is too large")))
}

#[derive(Deserialize)]
struct MatrixParts {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixParts> for Matrix {
    type Error = DataError;

    fn try_from(p: MatrixParts) -> Result<Self, Self::Error> {
        Matrix::from_vec(p.rows, p.cols, p.data)
    }
}
