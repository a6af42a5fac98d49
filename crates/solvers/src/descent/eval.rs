//! Objective evaluation and inner line search shared by the solvers.

use descent_core::{Objective, Restriction, linalg};

use crate::scalar::{self, bisection};

use super::{ConfigError, Error};

/// Evaluates the gradient at `x`, rejecting non-finite results.
pub(super) fn gradient<O, const N: usize>(
    objective: &O,
    x: &[f64; N],
    iter: usize,
) -> Result<[f64; N], Error>
where
    O: Objective<N>,
{
    let gradient = objective.gradient(x).map_err(Error::objective)?;
    if linalg::is_finite(&gradient) {
        Ok(gradient)
    } else {
        Err(non_finite(iter))
    }
}

/// Checks that an updated point or direction is finite.
pub(super) fn ensure_finite<const N: usize>(x: [f64; N], iter: usize) -> Result<[f64; N], Error> {
    if linalg::is_finite(&x) {
        Ok(x)
    } else {
        Err(non_finite(iter))
    }
}

fn non_finite(iter: usize) -> Error {
    tracing::warn!(iter, "iterate became non-finite");
    Error::NonFiniteIterate { iter }
}

/// Minimizes `f(x + a·direction)` over `a ∈ [0, 1]` by bisection.
pub(super) fn step_along<O, const N: usize>(
    objective: &O,
    x: &[f64; N],
    direction: &[f64; N],
    config: &scalar::Config,
) -> Result<f64, Error>
where
    O: Objective<N>,
{
    let restriction = Restriction::new(objective, *x, *direction);
    match bisection::minimize_unobserved(&restriction, [0.0, 1.0], config) {
        Ok(solution) => Ok(solution.x),
        Err(scalar::Error::Objective(err)) => Err(Error::Objective(err)),
        // The bracket is always [0, 1], so only the tolerance can be invalid.
        Err(scalar::Error::InvalidConfig(_) | scalar::Error::InvalidBracket(_)) => {
            Err(ConfigError::LineSearchTolerance.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnObjective;

    /// Fails every evaluation.
    struct Unavailable;

    impl Objective<1> for Unavailable {
        type Error = std::fmt::Error;

        fn value(&self, _: &[f64; 1]) -> Result<f64, Self::Error> {
            Err(std::fmt::Error)
        }

        fn gradient(&self, _: &[f64; 1]) -> Result<[f64; 1], Self::Error> {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn step_along_minimizes_on_unit_interval() {
        let bowl = FnObjective::new(|x: &[f64; 1]| x[0] * x[0], |x: &[f64; 1]| [2.0 * x[0]]);
        let config = scalar::Config::new(1e-8).unwrap();

        // (1 - 4a)² is smallest at a = 0.25.
        let step = step_along(&bowl, &[1.0], &[-4.0], &config).unwrap();
        assert_relative_eq!(step, 0.25, epsilon = 1e-8);
    }

    #[test]
    fn inner_objective_failure_is_not_wrapped() {
        let config = scalar::Config::new(1e-3).unwrap();
        let result = step_along(&Unavailable, &[1.0], &[-1.0], &config);

        assert!(matches!(result, Err(Error::Objective(_))));
    }
}
