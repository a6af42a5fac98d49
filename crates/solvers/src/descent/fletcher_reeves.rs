//! Fletcher–Reeves nonlinear conjugate gradient.
//!
//! Starts along the steepest-descent direction and, after each bisection
//! step over `[0, 1]`, mixes the new negative gradient with the previous
//! direction using `β = |∇f(x₊)|² / |∇f(x)|²`.
//!
//! Convergence is judged on the norm of the search direction rather than the
//! gradient. On the first iteration the two coincide.

use descent_core::{Objective, Observer, linalg};
use tracing::{debug, trace};

use super::{
    Action, Config, Error, Event, Solution, Status,
    eval::{ensure_finite, gradient, step_along},
};

/// Minimizes the objective starting from `x0`.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, or if the
/// objective fails or produces a non-finite iterate.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event<N>, Action>,
{
    config.validate()?;
    let line_search = config.line_search(config.tolerance())?;
    if !linalg::is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let steepest_descent = linalg::scale(-1.0, &gradient(objective, &x0, 0)?);
    let mut direction = steepest_descent;
    let mut x = x0;
    let mut iters = 0;

    loop {
        if linalg::norm(&direction) < config.tolerance() {
            iters += 1;
            debug!(iters, "fletcher-reeves converged");
            return Ok(Solution::new(Status::Converged, x, iters));
        }
        if config.exhausted(iters) {
            debug!(iters, "fletcher-reeves reached iteration limit");
            return Ok(Solution::new(Status::MaxIters, x, iters));
        }

        iters += 1;

        let step_size = step_along(objective, &x, &direction, &line_search)?;
        let grad = gradient(objective, &x, iters)?;
        x = ensure_finite(linalg::axpy(step_size, &direction, &x), iters)?;

        // A zero step restarts from steepest descent at the starting point.
        #[allow(clippy::float_cmp)]
        let restart = step_size == 0.0;
        direction = if restart {
            steepest_descent
        } else {
            let next = gradient(objective, &x, iters)?;
            let beta = linalg::dot(&next, &next) / linalg::dot(&grad, &grad);
            linalg::sub(&linalg::scale(beta, &direction), &next)
        };
        direction = ensure_finite(direction, iters)?;
        trace!(iter = iters, ?x, step_size, restart, "fletcher-reeves update");

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
/// Returns an error if the config or starting point is invalid, or if the
/// objective fails or produces a non-finite iterate.
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, x0, config, ())
}
