//! Golden section search.
//!
//! Keeps two interior probes at golden-ratio fractions of the bracket.
//! After each comparison one probe becomes the new interior point and a
//! single new probe is placed by reflection, so every iteration after the
//! first costs one evaluation.

use descent_core::{Objective, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution,
    search::{Narrow, Progress, search, value},
};

/// Finds the minimum of the objective using golden section search.
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
    search(objective, bracket, config, observer, GoldenSection::new())
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

#[derive(Debug, Clone, Copy)]
struct Probe {
    x: f64,
    value: f64,
}

impl Probe {
    fn at<O: Objective<1>>(objective: &O, x: f64) -> Result<Self, Error> {
        Ok(Self {
            x,
            value: value(objective, x)?,
        })
    }
}

struct GoldenSection {
    /// The inverse golden ratio, `(√5 - 1) / 2`.
    ratio: f64,

    /// Interior probes `(inner_left, inner_right)`, placed on first use.
    probes: Option<(Probe, Probe)>,
}

impl GoldenSection {
    fn new() -> Self {
        Self {
            ratio: (5.0_f64.sqrt() - 1.0) / 2.0,
            probes: None,
        }
    }
}

impl Narrow for GoldenSection {
    const NAME: &'static str = "golden_section";

    fn narrow<O: Objective<1>>(
        &mut self,
        objective: &O,
        bracket: &mut Bracket,
    ) -> Result<Progress, Error> {
        let (inner_left, inner_right) = match self.probes.take() {
            Some(probes) => probes,
            None => {
                let width = bracket.width();
                let m = bracket.left + (1.0 - self.ratio) * width;
                let n = bracket.left + self.ratio * width;
                (Probe::at(objective, m)?, Probe::at(objective, n)?)
            }
        };

        self.probes = Some(if inner_left.value > inner_right.value {
            bracket.left = inner_left.x;
            let m = inner_right;
            let n = bracket.right - (m.x - bracket.left);
            (m, Probe::at(objective, n)?)
        } else {
            bracket.right = inner_right.x;
            let n = inner_left;
            let m = bracket.left + (bracket.right - n.x);
            (Probe::at(objective, m)?, n)
        });

        Ok(Progress::Narrowed)
    }
}
