// veer_core/src/gaussian.rs

use crate::error::NoiseModelError;
use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::StandardNormal;

/// A multivariate Gaussian distribution N(mean, cov).
///
/// The covariance is factorized once at construction into a lower-triangular
/// `L` with `L * L^T = cov`, so drawing a sample is just `mean + L * z` with
/// `z` i.i.d. standard normal. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariateGaussian {
    mean: DVector<f64>,
    cov: DMatrix<f64>,
    factor: DMatrix<f64>,
}

impl MultivariateGaussian {
    /// Builds a Gaussian from a mean vector and a full covariance matrix.
    ///
    /// The covariance must be square, symmetric, positive semi-definite, and
    /// of the same dimension as the mean.
    pub fn new(mean: DVector<f64>, cov: DMatrix<f64>) -> Result<Self, NoiseModelError> {
        if cov.nrows() != cov.ncols() {
            return Err(NoiseModelError::CovarianceNotSquare {
                rows: cov.nrows(),
                cols: cov.ncols(),
            });
        }
        if mean.len() != cov.nrows() {
            return Err(NoiseModelError::DimensionMismatch {
                mean_dim: mean.len(),
                cov_rows: cov.nrows(),
                cov_cols: cov.ncols(),
            });
        }
        let factor = factorize(&cov)?;
        Ok(Self { mean, cov, factor })
    }

    /// Builds a Gaussian from a mean vector and per-axis variances.
    ///
    /// The variance vector is expanded into a diagonal covariance matrix,
    /// which is trivially symmetric positive semi-definite as long as every
    /// variance is non-negative.
    pub fn from_variances(
        mean: DVector<f64>,
        variances: DVector<f64>,
    ) -> Result<Self, NoiseModelError> {
        let cov = DMatrix::from_diagonal(&variances);
        Self::new(mean, cov)
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &DVector<f64> {
        &self.mean
    }

    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.cov
    }

    /// Draws one sample, `mean + L * z`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64> {
        let z = DVector::from_fn(self.dim(), |_, _| rng.sample::<f64, _>(StandardNormal));
        &self.mean + &self.factor * z
    }
}

/// Computes a lower-triangular `L` with `L * L^T = cov`.
///
/// Diagonal matrices are factored element-wise so that exactly-zero variances
/// are accepted; `nalgebra`'s Cholesky rejects singular matrices, and the
/// shipped catalog contains one zero-variance axis.
fn factorize(cov: &DMatrix<f64>) -> Result<DMatrix<f64>, NoiseModelError> {
    let asymmetry = (cov - cov.transpose()).amax();
    if asymmetry > 1e-12 {
        return Err(NoiseModelError::CovarianceNotSymmetric);
    }

    let is_diagonal = cov
        .iter()
        .enumerate()
        .all(|(k, &v)| k / cov.nrows() == k % cov.nrows() || v == 0.0);

    if is_diagonal {
        let diag = cov.diagonal();
        if diag.iter().any(|&v| v < 0.0) {
            return Err(NoiseModelError::CovarianceNotPositiveSemiDefinite);
        }
        Ok(DMatrix::from_diagonal(&diag.map(f64::sqrt)))
    } else {
        nalgebra::Cholesky::new(cov.clone())
            .map(|c| c.l())
            .ok_or(NoiseModelError::CovarianceNotPositiveSemiDefinite)
    }
}
