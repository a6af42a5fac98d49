/// Actions an observer can take during a descent solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop early and report the current point.
    StopEarly,
}
