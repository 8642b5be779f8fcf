//! Mean/std standardization.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};
use crate::matrix::Matrix;

/// Standard scaler (per-column mean and population standard deviation).
///
/// Columns with zero variance are given a standard deviation of `1.0`, so transforming them only
/// centers the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerParts")]
pub struct StandardScaler {
    means: Vec<f64>,
    std_devs: Vec<f64>,
    fitted: bool,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Per-column means learned by [`StandardScaler::fit`].
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Per-column standard deviations learned by [`StandardScaler::fit`].
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Learn per-column statistics from `x`. Refitting replaces any previous statistics.
    pub fn fit(&mut self, x: &Matrix) -> DataResult<()> {
        let (nrows, ncols) = x.shape();
        if nrows == 0 {
            return Err(DataError::invalid_argument(
                "cannot fit a scaler on a matrix with zero rows",
            ));
        }

        let mut means = vec![0.0; ncols];
        for r in 0..nrows {
            for (m, v) in means.iter_mut().zip(x.row_slice(r)) {
                *m += v;
            }
        }
        let nrows_f = nrows as f64;
        for m in means.iter_mut() {
            *m /= nrows_f;
        }

        let mut std_devs = vec![0.0; ncols];
        for r in 0..nrows {
            for ((s, v), m) in std_devs.iter_mut().zip(x.row_slice(r)).zip(&means) {
                let d = v - m;
                *s += d * d;
            }
        }
        for s in std_devs.iter_mut() {
            *s = (*s / nrows_f).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        self.means = means;
        self.std_devs = std_devs;
        self.fitted = true;
        Ok(())
    }

    /// Return a new matrix with every value replaced by `(x - mean) / std` for its column.
    pub fn transform(&self, x: &Matrix) -> DataResult<Matrix> {
        if !self.fitted {
            return Err(DataError::invalid_argument("scaler must be fitted first"));
        }
        let (nrows, ncols) = x.shape();
        if ncols != self.means.len() {
            return Err(DataError::DimensionMismatch {
                op: "transform",
                left: (nrows, ncols),
                right: (1, self.means.len()),
            });
        }

        let mut out = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for ((v, m), s) in x.row_slice(r).iter().zip(&self.means).zip(&self.std_devs) {
                out.push((v - m) / s);
            }
        }
        Matrix::from_vec(nrows, ncols, out)
    }

    /// Fit on `x`, then transform it.
    pub fn fit_transform(&mut self, x: &Matrix) -> DataResult<Matrix> {
        self.fit(x)?;
        self.transform(x)
    }
}

#[derive(Deserialize)]
struct ScalerParts {
    means: Vec<f64>,
    std_devs: Vec<f64>,
    fitted: bool,
}

impl TryFrom<ScalerParts> for StandardScaler {
    type Error = DataError;

    fn try_from(p: ScalerParts) -> Result<Self, Self::Error> {
        if p.means.len() != p.std_devs.len() {
            return Err(DataError::invalid_argument(format!(
                "scaler has {} means but {} standard deviations",
                p.means.len(),
                p.std_devs.len()
            )));
        }
        if !p.fitted && !p.means.is_empty() {
            return Err(DataError::invalid_argument("unfitted scaler cannot carry statistics"));
        }
        if p.std_devs.iter().any(|s| s.is_nan() || *s <= 0.0) {
            return Err(DataError::invalid_argument(
                "scaler standard deviations must be positive",
            ));
        }
        Ok(Self {
            means: p.means,
            std_devs: p.std_devs,
            fitted: p.fitted,
        })
    }
}
