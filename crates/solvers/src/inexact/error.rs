use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during a step-acceptance search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The initial trial step was not finite and positive.
    #[error("initial step must be finite and positive, got {0}")]
    InvalidStep(f64),

    /// The objective produced a non-finite value or slope.
    #[error("non-finite objective at step {step}")]
    NonFiniteValue { step: f64 },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
