use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during a descent solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The starting point or curvature seed contains NaN or infinite entries.
    #[error("non-finite starting point or curvature seed")]
    NonFiniteStart,

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    /// A rank-2 update denominator was zero, negative, or non-finite.
    #[error("curvature update broke down at iteration {iter} (denominator {denominator})")]
    CurvatureBreakdown { iter: usize, denominator: f64 },

    /// The BFGS curvature matrix could not be inverted.
    #[error("curvature matrix is singular at iteration {iter}")]
    SingularCurvature { iter: usize },

    /// The point or gradient became NaN or infinite.
    #[error("iterate became non-finite at iteration {iter}")]
    NonFiniteIterate { iter: usize },
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
