/// Actions an observer can take during a scalar search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and report the midpoint of the current bracket.
    StopEarly,
}
