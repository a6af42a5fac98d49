/// Event emitted by a scalar search after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The bracket after this iteration narrowed it.
    pub bracket: [f64; 2],
}
