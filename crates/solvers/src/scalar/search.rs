use descent_core::{Objective, Observer};
use tracing::{debug, trace};

use super::{Action, Bracket, Config, Error, Event, Solution, Status};

/// Outcome of a single narrowing step.
pub(super) enum Progress {
    /// The bracket was narrowed; keep going.
    Narrowed,

    /// The minimizer was located exactly at the bracket midpoint.
    Exact,

    /// The probes can no longer be placed meaningfully inside the bracket.
    /// The bracket is left untouched.
    Degenerate,
}

/// One family of bracket-narrowing rules.
pub(super) trait Narrow {
    /// Name used in log output.
    const NAME: &'static str;

    /// Performs one iteration, shrinking `bracket` in place.
    fn narrow<O: Objective<1>>(
        &mut self,
        objective: &O,
        bracket: &mut Bracket,
    ) -> Result<Progress, Error>;
}

/// Core loop shared by all scalar searches.
///
/// Iterates while the bracket is at least `tolerance` wide, emitting one
/// event per iteration and reporting the bracket midpoint when done. A
/// degenerate iteration leaves the bracket unchanged and emits no event.
pub(super) fn search<O, Obs, S>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    mut strategy: S,
) -> Result<Solution, Error>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
    S: Narrow,
{
    config.validate()?;
    let mut bracket = Bracket::new(bracket)?;
    let mut iters = 0;

    while bracket.width() >= config.tolerance() {
        if config.max_iters().is_some_and(|max| iters >= max) {
            debug!(method = S::NAME, iters, "iteration limit reached");
            return Ok(Solution::at_midpoint(Status::MaxIters, &bracket, iters));
        }

        iters += 1;
        let progress = strategy.narrow(objective, &mut bracket)?;
        if let Progress::Degenerate = progress {
            debug!(
                method = S::NAME,
                iters,
                width = bracket.width(),
                "probe placement degenerated",
            );
            return Ok(Solution::at_midpoint(Status::Degenerate, &bracket, iters));
        }
        trace!(
            method = S::NAME,
            iter = iters,
            left = bracket.left(),
            right = bracket.right(),
            "bracket narrowed",
        );

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::at_midpoint(
                Status::StoppedByObserver,
                &bracket,
                iters,
            ));
        }

        if let Progress::Exact = progress {
            debug!(method = S::NAME, iters, "derivative vanished at midpoint");
            return Ok(Solution::at_midpoint(Status::Converged, &bracket, iters));
        }
    }

    debug!(method = S::NAME, iters, x = bracket.midpoint(), "converged");
    Ok(Solution::at_midpoint(Status::Converged, &bracket, iters))
}

/// Evaluates the objective at `x`.
pub(super) fn value<O: Objective<1>>(objective: &O, x: f64) -> Result<f64, Error> {
    objective.value(&[x]).map_err(Error::objective)
}

/// Evaluates the derivative of the objective at `x`.
pub(super) fn slope<O: Objective<1>>(objective: &O, x: f64) -> Result<f64, Error> {
    let [slope] = objective.gradient(&[x]).map_err(Error::objective)?;
    Ok(slope)
}
