/// Actions an observer can take during a step-acceptance search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop early and report the current trial step without accepting it.
    StopEarly,
}
