//! Dichotomous search.
//!
//! Places two probes a distance `tolerance` either side of the midpoint and
//! discards the side with the larger value.
//!
//! Once both probes sit within `1e-3` of their nearest bracket endpoints the
//! search stops with [`Status::Degenerate`](super::Status::Degenerate), even
//! if the bracket is still wider than the tolerance. The final bracket is
//! then narrower than about `2 * (tolerance + 1e-3)`.

use descent_core::{Objective, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution,
    search::{Narrow, Progress, search, value},
};

/// Probe-to-endpoint distance below which probe placement is degenerate.
const DEGENERATE_GAP: f64 = 1e-3;

/// Finds the minimum of the objective using dichotomous search.
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
    let strategy = Dichotomous {
        offset: config.tolerance(),
    };
    search(objective, bracket, config, observer, strategy)
}

/// Finds the minimum without observer support.
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

struct Dichotomous {
    offset: f64,
}

impl Narrow for Dichotomous {
    const NAME: &'static str = "dichotomous";

    fn narrow<O: Objective<1>>(
        &mut self,
        objective: &O,
        bracket: &mut Bracket,
    ) -> Result<Progress, Error> {
        let mid = bracket.midpoint();
        let m = mid - self.offset;
        let n = mid + self.offset;

        let left_gap = (m - bracket.left).abs();
        let right_gap = (n - bracket.right).abs();
        if left_gap < DEGENERATE_GAP && right_gap < DEGENERATE_GAP {
            return Ok(Progress::Degenerate);
        }

        if value(objective, m)? > value(objective, n)? {
            bracket.left = m;
        } else {
            bracket.right = n;
        }
        Ok(Progress::Narrowed)
    }
}
