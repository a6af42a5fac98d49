//! Gradient descent with momentum.
//!
//! Keeps an exponential moving average of the gradient,
//! `v ← β·v + (1 − β)·∇f`, and steps `x ← x − step_size·v`.
//!
//! Each iteration also bisects along `−v` over `[0, 1]`, but the step it
//! finds is only logged; the fixed `step_size` is what moves the point.

use descent_core::{Objective, Observer, linalg};
use tracing::{debug, trace};

use super::{
    Action, Config, ConfigError, Error, Event, Solution, Status,
    config::is_positive,
    eval::{ensure_finite, gradient, step_along},
};

/// Momentum hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    beta: f64,
    step_size: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            beta: 0.9,
            step_size: 1e-3,
        }
    }
}

impl Params {
    /// Creates momentum parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `beta` is not in `[0, 1)` or `step_size` is not
    /// finite and positive.
    pub fn new(beta: f64, step_size: f64) -> Result<Self, ConfigError> {
        let params = Self { beta, step_size };
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
        Ok(())
    }

    /// Moving-average rate applied to the previous velocity.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
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
    let line_search = config.line_search(config.tolerance())?;
    if !linalg::is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let mut x = x0;
    let mut velocity = [0.0; N];
    let mut iters = 0;

    loop {
        let grad = gradient(objective, &x, iters + 1)?;
        if linalg::norm(&grad) < config.tolerance() {
            iters += 1;
            debug!(iters, "momentum converged");
            return Ok(Solution::new(Status::Converged, x, iters));
        }
        if config.exhausted(iters) {
            debug!(iters, "momentum reached iteration limit");
            return Ok(Solution::new(Status::MaxIters, x, iters));
        }

        iters += 1;

        velocity = linalg::add(
            &linalg::scale(params.beta, &velocity),
            &linalg::scale(1.0 - params.beta, &grad),
        );

        let reverse = linalg::scale(-1.0, &velocity);
        let searched_step = step_along(objective, &x, &reverse, &line_search)?;

        let step_size = params.step_size;
        x = ensure_finite(
            linalg::sub(&x, &linalg::scale(step_size, &velocity)),
            iters,
        )?;
        trace!(iter = iters, ?x, step_size, searched_step, "momentum update");

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
