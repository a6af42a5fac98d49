//! The Goldstein acceptance rule.
//!
//! A trial step `a` is accepted when the decrease `φ(a) − φ(0)` lies between
//! `(1 − ρ)·g0·a` and `ρ·g0·a`. A decrease larger in magnitude than
//! `(1 − ρ)·g0·a` means the step is too short and it is expanded; a decrease
//! smaller than `ρ·g0·a` means it overshot and it is contracted.

use descent_core::{Objective, Observer};

use super::{
    Action, Config, Error, Event, Solution,
    search::{Judgement, Origin, Rule, Verdict, decrease, run},
};

/// Scales `initial_step` until it satisfies the Goldstein conditions.
///
/// # Errors
///
/// Returns an error if the config or initial step is invalid, or if the
/// objective fails or produces a non-finite value.
pub fn search<O, Obs>(
    objective: &O,
    initial_step: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
{
    run::<_, _, Goldstein>(objective, initial_step, config, observer)
}

/// Scales `initial_step` until it satisfies the Goldstein conditions,
/// without observer support.
///
/// # Errors
///
/// Returns an error if the config or initial step is invalid, or if the
/// objective fails or produces a non-finite value.
pub fn search_unobserved<O: Objective<1>>(
    objective: &O,
    initial_step: f64,
    config: &Config,
) -> Result<Solution, Error> {
    search(objective, initial_step, config, ())
}

struct Goldstein;

impl Rule for Goldstein {
    const NAME: &'static str = "goldstein";

    fn judge<O: Objective<1>>(
        objective: &O,
        origin: Origin,
        step: f64,
        config: &Config,
    ) -> Result<Judgement, Error> {
        let rho = config.rho();
        let upper = rho * origin.slope * step;
        let lower = (1.0 - rho) * origin.slope * step;
        let decrease = decrease(objective, origin, step)?;

        let verdict = if decrease < lower {
            Verdict::Expand
        } else if decrease > upper {
            Verdict::Contract
        } else {
            Verdict::Accept
        };
        Ok(Judgement { verdict, decrease })
    }
}
