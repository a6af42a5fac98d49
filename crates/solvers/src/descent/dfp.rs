//! Davidon–Fletcher–Powell quasi-Newton method.
//!
//! Maintains an approximation `H` of the inverse Hessian. Each iteration
//! searches along `d = −H·∇f`, bisecting on the directional derivative over
//! `[0, 1]`, then applies the DFP rank-2 update with `s = a·d` and
//! `y = ∇f(x + s) − ∇f(x)`.
//!
//! The inner bisection uses a bracket tolerance of `1e-3` unless
//! [`Config::line_search_tolerance`] is set.

use descent_core::{Objective, Observer, linalg};
use nalgebra::SVector;
use tracing::{debug, trace, warn};

use super::{
    Action, Config, Error, Event, Matrix, Solution, Status, curvature,
    eval::{ensure_finite, gradient, step_along},
};

/// Inner bisection tolerance used when the config does not set one.
const LINE_SEARCH_TOLERANCE: f64 = 1e-3;

/// Minimizes the objective starting from `x0` with inverse-Hessian seed `h0`.
///
/// `h0` is typically `Matrix::identity()`.
///
/// # Errors
///
/// Returns an error if the config or starting state is invalid, if the
/// objective fails, or if the curvature update breaks down.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    h0: Matrix<N>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event<N>, Action>,
{
    config.validate()?;
    let line_search = config.line_search(LINE_SEARCH_TOLERANCE)?;
    if !linalg::is_finite(&x0) || !curvature::is_finite(&h0) {
        return Err(Error::NonFiniteStart);
    }

    let mut x = x0;
    let mut h = h0;
    let mut iters = 0;

    loop {
        let grad = gradient(objective, &x, iters)?;
        if linalg::norm(&grad) < config.tolerance() {
            debug!(iters, "dfp converged");
            return Ok(Solution::new(Status::Converged, x, iters));
        }
        if config.exhausted(iters) {
            debug!(iters, "dfp reached iteration limit");
            return Ok(Solution::new(Status::MaxIters, x, iters));
        }

        iters += 1;
        let direction: [f64; N] = (-(h * SVector::from(grad))).into();
        let step_size = step_along(objective, &x, &direction, &line_search)?;
        let s = linalg::scale(step_size, &direction);
        x = ensure_finite(linalg::add(&x, &s), iters)?;

        let y = linalg::sub(&gradient(objective, &x, iters)?, &grad);
        h = curvature::dfp(&h, &s.into(), &y.into()).map_err(|denominator| {
            warn!(iter = iters, denominator, "dfp curvature update broke down");
            Error::CurvatureBreakdown {
                iter: iters,
                denominator,
            }
        })?;
        trace!(iter = iters, ?x, step_size, "dfp update");

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
/// Returns an error if the config or starting state is invalid, if the
/// objective fails, or if the curvature update breaks down.
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    x0: [f64; N],
    h0: Matrix<N>,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, x0, h0, config, ())
}
