//! Fibonacci search.
//!
//! Places two probes at fractions `F(k-2)/F(k)` and `F(k-1)/F(k)` of the
//! bracket, where `F` is the Fibonacci sequence seeded with `0, 1, 1, 2` and
//! extended by one term per iteration. Both probes are evaluated each
//! iteration.

use descent_core::{Objective, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution,
    search::{Narrow, Progress, search, value},
};

/// Finds the minimum of the objective using Fibonacci search.
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
    search(objective, bracket, config, observer, Fibonacci::new())
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

/// The three most recent Fibonacci terms.
///
/// Terms are held as `f64`; they stay exact well past any iteration count
/// a finite tolerance can require.
struct Fibonacci {
    terms: [f64; 3],
}

impl Fibonacci {
    fn new() -> Self {
        Self {
            terms: [1.0, 1.0, 2.0],
        }
    }

    /// Appends the next term and returns the two probe fractions.
    fn advance(&mut self) -> (f64, f64) {
        let [_, a, b] = self.terms;
        self.terms = [a, b, a + b];
        let [f3, f2, f1] = self.terms;
        (f3 / f1, f2 / f1)
    }
}

impl Narrow for Fibonacci {
    const NAME: &'static str = "fibonacci";

    fn narrow<O: Objective<1>>(
        &mut self,
        objective: &O,
        bracket: &mut Bracket,
    ) -> Result<Progress, Error> {
        let (near, far) = self.advance();
        let width = bracket.width();
        let m = bracket.left + width * near;
        let n = bracket.left + width * far;

        if value(objective, m)? > value(objective, n)? {
            bracket.left = m;
        } else {
            bracket.right = n;
        }
        Ok(Progress::Narrowed)
    }
}
