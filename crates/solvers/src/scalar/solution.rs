use super::Bracket;

/// Indicates how a scalar search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket is narrower than the tolerance, or the derivative vanished
    /// exactly at a probe.
    Converged,

    /// Probe placement became numerically degenerate before the bracket
    /// reached the tolerance (dichotomous search only).
    Degenerate,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a scalar search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Estimate of the minimizer.
    pub x: f64,

    /// The final bracket.
    pub bracket: [f64; 2],

    /// Iteration count when the search finished.
    pub iters: usize,
}

impl Solution {
    /// Reports the midpoint of `bracket` as the minimizer estimate.
    pub(super) fn at_midpoint(status: Status, bracket: &Bracket, iters: usize) -> Self {
        Self {
            status,
            x: bracket.midpoint(),
            bracket: bracket.as_array(),
            iters,
        }
    }
}
