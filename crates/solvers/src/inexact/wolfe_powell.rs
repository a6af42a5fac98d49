//! The Wolfe–Powell acceptance rule.
//!
//! A trial step `a` is accepted when it gives sufficient decrease,
//! `φ(a) − φ(0) ≤ ρ·g0·a`, and the slope has flattened enough,
//! `φ'(a) ≥ σ·g0`. Insufficient decrease contracts the step; a slope that is
//! still steep expands it.

use descent_core::{Objective, Observer};

use super::{
    Action, Config, Error, Event, Solution,
    search::{Judgement, Origin, Rule, Verdict, decrease, run, slope},
};

/// Scales `initial_step` until it satisfies the Wolfe–Powell conditions.
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
    run::<_, _, WolfePowell>(objective, initial_step, config, observer)
}

/// Scales `initial_step` until it satisfies the Wolfe–Powell conditions,
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

struct WolfePowell;

impl Rule for WolfePowell {
    const NAME: &'static str = "wolfe_powell";

    fn judge<O: Objective<1>>(
        objective: &O,
        origin: Origin,
        step: f64,
        config: &Config,
    ) -> Result<Judgement, Error> {
        let upper = config.rho() * origin.slope * step;
        let decrease = decrease(objective, origin, step)?;
        let slope = slope(objective, step)?;

        let verdict = if decrease > upper {
            Verdict::Contract
        } else if slope < config.sigma() * origin.slope {
            Verdict::Expand
        } else {
            Verdict::Accept
        };
        Ok(Judgement { verdict, decrease })
    }
}
