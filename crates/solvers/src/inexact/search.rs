use descent_core::{Objective, Observer};
use tracing::{debug, trace};

use super::{Action, Config, Error, Event, Solution, Status};

/// The restriction's value and slope at zero step.
#[derive(Debug, Clone, Copy)]
pub(super) struct Origin {
    pub(super) value: f64,
    pub(super) slope: f64,
}

/// What to do with a trial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Verdict {
    Accept,
    Expand,
    Contract,
}

/// A judged trial step.
pub(super) struct Judgement {
    pub(super) verdict: Verdict,
    pub(super) decrease: f64,
}

/// An acceptance test applied to each trial step.
pub(super) trait Rule {
    /// Name used in log output.
    const NAME: &'static str;

    fn judge<O: Objective<1>>(
        objective: &O,
        origin: Origin,
        step: f64,
        config: &Config,
    ) -> Result<Judgement, Error>;
}

/// Core loop shared by the acceptance rules.
pub(super) fn run<O, Obs, R>(
    objective: &O,
    initial_step: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
    R: Rule,
{
    config.validate()?;
    if !initial_step.is_finite() || initial_step <= 0.0 {
        return Err(Error::InvalidStep(initial_step));
    }

    let slope = slope(objective, 0.0)?;
    let origin = Origin {
        value: value(objective, 0.0)?,
        slope,
    };

    let mut step = initial_step;
    let mut iters = 0;

    loop {
        if config.max_iters().is_some_and(|max| iters >= max) {
            debug!(rule = R::NAME, iters, step, "iteration limit reached");
            return Ok(Solution {
                status: Status::MaxIters,
                step,
                iters,
            });
        }

        iters += 1;
        let Judgement { verdict, decrease } = R::judge(objective, origin, step, config)?;
        trace!(rule = R::NAME, iter = iters, step, decrease, ?verdict, "judged step");

        let event = Event {
            iter: iters,
            step,
            decrease,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                step,
                iters,
            });
        }

        match verdict {
            Verdict::Accept => {
                debug!(rule = R::NAME, iters, step, "step accepted");
                return Ok(Solution {
                    status: Status::Accepted,
                    step,
                    iters,
                });
            }
            Verdict::Expand => step *= config.expand(),
            Verdict::Contract => step *= config.contract(),
        }
    }
}

/// Returns `φ(step) − φ(0)`, rejecting non-finite values.
pub(super) fn decrease<O: Objective<1>>(
    objective: &O,
    origin: Origin,
    step: f64,
) -> Result<f64, Error> {
    let decrease = value(objective, step)? - origin.value;
    if decrease.is_finite() {
        Ok(decrease)
    } else {
        Err(Error::NonFiniteValue { step })
    }
}

pub(super) fn value<O: Objective<1>>(objective: &O, step: f64) -> Result<f64, Error> {
    let value = objective.value(&[step]).map_err(Error::objective)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { step })
    }
}

pub(super) fn slope<O: Objective<1>>(objective: &O, step: f64) -> Result<f64, Error> {
    let [slope] = objective.gradient(&[step]).map_err(Error::objective)?;
    if slope.is_finite() {
        Ok(slope)
    } else {
        Err(Error::NonFiniteValue { step })
    }
}
