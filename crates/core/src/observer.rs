/// A per-iteration hook into a running solver.
///
/// Every solver in this workspace calls [`observe`](Observer::observe) once
/// per iteration with an event describing the new iterate. Returning
/// `Some(action)` asks the solver to act on it (stopping early is the only
/// action the solvers define); `None` leaves the iteration alone.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which is the usual
/// way to record a trajectory. Pass `()` when no observation is needed.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    #[test]
    fn unit_observer_never_acts() {
        for iter in 0..5_usize {
            let action = Observer::<usize, Stop>::observe(&mut (), &iter);
            assert!(action.is_none());
        }
    }

    #[test]
    fn closure_observer_can_carry_state() {
        let mut seen = Vec::new();
        let mut observer = |iter: &usize| {
            seen.push(*iter);
            (*iter >= 2).then_some(Stop::Now)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Stop::Now));
        assert_eq!(seen, vec![1, 2]);
    }
}
