/// Indicates how a step-acceptance search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step satisfied the acceptance test.
    Accepted,

    /// Reached the iteration limit; the step was not accepted.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a step-acceptance search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// The accepted step, or the last trial step if none was accepted.
    pub step: f64,

    /// Number of trial steps judged.
    pub iters: usize,
}
