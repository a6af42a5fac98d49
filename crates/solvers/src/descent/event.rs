/// Event emitted by a descent solver after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// Iteration counter, as reported in [`Solution::iters`](super::Solution::iters).
    pub iter: usize,

    /// The point after this update.
    pub x: [f64; N],

    /// The step length applied along the search direction.
    pub step_size: f64,
}
