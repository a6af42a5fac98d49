//! Broyden–Fletcher–Goldfarb–Shanno quasi-Newton method.
//!
//! Maintains an approximation `B` of the Hessian itself, inverting it each
//! iteration to obtain the direction `d = −B⁻¹·∇f`. The step comes from
//! bisection on `[0, 1]` and the BFGS rank-2 update uses `s = a·d` and
//! `y = ∇f(x + s) − ∇f(x)`.

use descent_core::{Objective, Observer, linalg};
use nalgebra::SVector;
use tracing::{debug, trace, warn};

use super::{
    Action, Config, Error, Event, Matrix, Solution, Status, curvature,
    eval::{ensure_finite, gradient, step_along},
};

/// Minimizes the objective starting from `x0` with Hessian seed `b0`.
///
/// `b0` is typically `Matrix::identity()` and must be invertible.
///
/// # Errors
///
/// Returns an error if the config or starting state is invalid, if the
/// objective fails, if the curvature matrix becomes singular, or if the
/// curvature update breaks down.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    b0: Matrix<N>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event<N>, Action>,
{
    config.validate()?;
    let line_search = config.line_search(config.tolerance())?;
    if !linalg::is_finite(&x0) || !curvature::is_finite(&b0) {
        return Err(Error::NonFiniteStart);
    }

    let mut x = x0;
    let mut b = b0;
    let mut iters = 0;

    loop {
        let grad = gradient(objective, &x, iters)?;
        if linalg::norm(&grad) < config.tolerance() {
            debug!(iters, "bfgs converged");
            return Ok(Solution::new(Status::Converged, x, iters));
        }
        if config.exhausted(iters) {
            debug!(iters, "bfgs reached iteration limit");
            return Ok(Solution::new(Status::MaxIters, x, iters));
        }

        iters += 1;
        let Some(b_inv) = curvature::inverse(&b) else {
            warn!(iter = iters, "bfgs curvature matrix is singular");
            return Err(Error::SingularCurvature { iter: iters });
        };
        let direction: [f64; N] = (-(b_inv * SVector::from(grad))).into();
        let step_size = step_along(objective, &x, &direction, &line_search)?;
        let s = linalg::scale(step_size, &direction);
        x = ensure_finite(linalg::add(&x, &s), iters)?;

        let y = linalg::sub(&gradient(objective, &x, iters)?, &grad);
        b = curvature::bfgs(&b, &s.into(), &y.into()).map_err(|denominator| {
            warn!(iter = iters, denominator, "bfgs curvature update broke down");
            Error::CurvatureBreakdown {
                iter: iters,
                denominator,
            }
        })?;
        trace!(iter = iters, ?x, step_size, "bfgs update");

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
/// objective fails, if the curvature matrix becomes singular, or if the
/// curvature update breaks down.
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    x0: [f64; N],
    b0: Matrix<N>,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, x0, b0, config, ())
}
