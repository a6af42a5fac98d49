/// Indicates how a descent solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient (or search direction) norm dropped below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solve status.
    pub status: Status,

    /// The final point.
    pub x: [f64; N],

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<const N: usize> Solution<N> {
    pub(super) fn new(status: Status, x: [f64; N], iters: usize) -> Self {
        Self { status, x, iters }
    }
}
