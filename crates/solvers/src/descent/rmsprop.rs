//! RMSprop.
//!
//! Keeps an exponential moving average of the squared gradient,
//! `s ← β·s + (1 − β)·∇f²`, and steps
//! `x ← x − step_size·∇f / (‖s‖ + ε)`.
//!
//! The gradient is scaled by the Euclidean norm of the whole average, so all
//! coordinates share one scale factor.

use descent_core::{Objective, Observer, linalg};
use tracing::{debug, trace};

use super::{
    Action, Config, ConfigError, Error, Event, Solution, Status,
    config::is_positive,
    eval::{ensure_finite, gradient},
};

/// RMSprop hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    beta: f64,
    step_size: f64,
    epsilon: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            beta: 0.999,
            step_size: 0.1,
            epsilon: 1e-8,
        }
    }
}

impl Params {
    /// Creates RMSprop parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `beta` is not in `[0, 1)`, `step_size` is not
    /// finite and positive, or `epsilon` is negative or non-finite.
    pub fn new(beta: f64, step_size: f64, epsilon: f64) -> Result<Self, ConfigError> {
        let params = Self {
            beta,
            step_size,
            epsilon,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns the first parameter found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.beta) {
            return Err(ConfigError::Beta);
        }
        if !is_positive(self.step_size) {
            return Err(ConfigError::StepSize);
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(ConfigError::Epsilon);
        }
        Ok(())
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Added to the normalizer to keep it away from zero.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// Minimizes the objective starting from `x0`.
///
/// # Errors
///
/// Returns an error if the config, parameters, or starting point is invalid,
/// or if the objective fails or produces a non-finite iterate.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    params: &Params,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event<N>, Action>,
{
    config.validate()?;
    params.validate()?;
    if !linalg::is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let mut x = x0;
    let mut mean_square = [0.0; N];
    let mut iters = 0;

    loop {
        let grad = gradient(objective, &x, iters + 1)?;
        if linalg::norm(&grad) < config.tolerance() {
            iters += 1;
            debug!(iters, "rmsprop converged");
            return Ok(Solution::new(Status::Converged, x, iters));
        }
        if config.exhausted(iters) {
            debug!(iters, "rmsprop reached iteration limit");
            return Ok(Solution::new(Status::MaxIters, x, iters));
        }

        iters += 1;

        let squared = grad.map(|g| g * g);
        mean_square = linalg::add(
            &linalg::scale(params.beta, &mean_square),
            &linalg::scale(1.0 - params.beta, &squared),
        );

        let normalizer = linalg::norm(&mean_square) + params.epsilon;
        let update = linalg::scale(params.step_size, &grad).map(|v| v / normalizer);
        x = ensure_finite(linalg::sub(&x, &update), iters)?;

        let step_size = params.step_size / normalizer;
        trace!(iter = iters, ?x, step_size, "rmsprop update");

        let event = Event {
            iter: iters,
            x,
            step_size,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, iters));
        }
    }
}

/// Minimizes the objective without observer support.
///
/// # Errors
///
/// Returns an error if the config, parameters, or starting point is invalid,
/// or if the objective fails or produces a non-finite iterate.
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    x0: [f64; N],
    params: &Params,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, x0, params, config, ())
}
