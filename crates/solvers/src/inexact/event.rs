/// Event emitted after each trial step is judged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The trial step that was judged.
    pub step: f64,

    /// The change in objective, `φ(step) − φ(0)`.
    pub decrease: f64,
}
