//! Bisection on the derivative.
//!
//! Evaluates the derivative at the bracket midpoint and keeps the half in
//! which the derivative changes sign. The bracket width halves every
//! iteration, so the iteration count is `ceil(log2(width / tolerance))`.
//! If the derivative is exactly zero at a midpoint, that midpoint is returned
//! immediately.

use descent_core::{Objective, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution,
    search::{Narrow, Progress, search, slope},
};

/// Finds a stationary point of the objective by bisecting on its derivative.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if the
/// objective fails to evaluate.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
{
    search(objective, bracket, config, observer, Bisection)
}

/// Finds a stationary point without observer support.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if the
/// objective fails to evaluate.
pub fn minimize_unobserved<O: Objective<1>>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}

struct Bisection;

impl Narrow for Bisection {
    const NAME: &'static str = "bisection";

    fn narrow<O: Objective<1>>(
        &mut self,
        objective: &O,
        bracket: &mut Bracket,
    ) -> Result<Progress, Error> {
        let mid = bracket.midpoint();
        let slope = slope(objective, mid)?;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Ok(Progress::Exact);
        }

        if slope < 0.0 {
            bracket.left = mid;
        } else {
            bracket.right = mid;
        }
        Ok(Progress::Narrowed)
    }
}
