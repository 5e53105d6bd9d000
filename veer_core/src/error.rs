// veer_core/src/error.rs

use thiserror::Error;

/// Internal invariant violations in noise-model data.
///
/// The shipped catalog is compiled in, so hitting one of these at runtime is
/// a programming/data error, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseModelError {
    #[error("mean has {mean_dim} components but covariance is {cov_rows}x{cov_cols}")]
    DimensionMismatch {
        mean_dim: usize,
        cov_rows: usize,
        cov_cols: usize,
    },

    #[error("covariance matrix must be square, got {rows}x{cols}")]
    CovarianceNotSquare { rows: usize, cols: usize },

    #[error("covariance matrix is not symmetric")]
    CovarianceNotSymmetric,

    #[error("covariance matrix is not positive semi-definite")]
    CovarianceNotPositiveSemiDefinite,
}

/// Error for parsing a controller identifier from its canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a known controller (expected one of: ILQR, Proportional, Movebase)")]
pub struct UnknownControllerError(pub String);
