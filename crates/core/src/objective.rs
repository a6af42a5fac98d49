use std::convert::Infallible;

use crate::linalg;

/// A differentiable objective function of `N` variables.
///
/// Solvers only ever minimize. The const generic `N` is the dimension of the
/// domain; `N = 1` is the scalar case consumed by line searches.
///
/// Both methods are assumed to be pure: repeated calls with the same `x` must
/// return the same result. Curvature updates and reused probe values rely on it.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error>;

    /// Evaluates the gradient of the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be evaluated at `x`.
    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error>;
}

/// An infallible objective built from a value closure and a gradient closure.
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F, G> {
    value: F,
    gradient: G,
}

impl<F, G> FnObjective<F, G> {
    /// Creates an objective from `value` and `gradient` closures.
    pub const fn new(value: F, gradient: G) -> Self {
        Self { value, gradient }
    }
}

impl<F, G, const N: usize> Objective<N> for FnObjective<F, G>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
{
    type Error = Infallible;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.value)(x))
    }

    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok((self.gradient)(x))
    }
}

/// An infallible scalar objective built from `f(x)` and `f'(x)` closures.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F, G> {
    value: F,
    derivative: G,
}

impl<F, G> ScalarFn<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    /// Creates a scalar objective from `value` and `derivative` closures.
    pub const fn new(value: F, derivative: G) -> Self {
        Self { value, derivative }
    }
}

impl<F, G> Objective<1> for ScalarFn<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok((self.value)(x[0]))
    }

    fn gradient(&self, x: &[f64; 1]) -> Result<[f64; 1], Self::Error> {
        Ok([(self.derivative)(x[0])])
    }
}

/// The restriction of an objective to the line `origin + a * direction`.
///
/// As an [`Objective<1>`] over the step size `a`, its value is
/// `f(origin + a * direction)` and its derivative is the directional
/// derivative `∇f(origin + a * direction) · direction`.
#[derive(Debug, Clone, Copy)]
pub struct Restriction<'a, O, const N: usize> {
    objective: &'a O,
    origin: [f64; N],
    direction: [f64; N],
}

impl<'a, O, const N: usize> Restriction<'a, O, N>
where
    O: Objective<N>,
{
    /// Restricts `objective` to the line through `origin` along `direction`.
    pub fn new(objective: &'a O, origin: [f64; N], direction: [f64; N]) -> Self {
        Self {
            objective,
            origin,
            direction,
        }
    }

    /// Returns the point reached by stepping `step` along the direction.
    #[must_use]
    pub fn point_at(&self, step: f64) -> [f64; N] {
        linalg::axpy(step, &self.direction, &self.origin)
    }
}

impl<O, const N: usize> Objective<1> for Restriction<'_, O, N>
where
    O: Objective<N>,
{
    type Error = O::Error;

    fn value(&self, step: &[f64; 1]) -> Result<f64, Self::Error> {
        self.objective.value(&self.point_at(step[0]))
    }

    fn gradient(&self, step: &[f64; 1]) -> Result<[f64; 1], Self::Error> {
        let gradient = self.objective.gradient(&self.point_at(step[0]))?;
        Ok([linalg::dot(&gradient, &self.direction)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bowl() -> FnObjective<impl Fn(&[f64; 2]) -> f64, impl Fn(&[f64; 2]) -> [f64; 2]> {
        FnObjective::new(
            |x: &[f64; 2]| x[0] * x[0] + 10.0 * x[1] * x[1],
            |x: &[f64; 2]| [2.0 * x[0], 20.0 * x[1]],
        )
    }

    #[test]
    fn fn_objective_forwards_to_closures() {
        let objective = bowl();

        assert_relative_eq!(objective.value(&[1.0, 2.0]).unwrap(), 41.0);
        let [gx, gy] = objective.gradient(&[1.0, 2.0]).unwrap();
        assert_relative_eq!(gx, 2.0);
        assert_relative_eq!(gy, 40.0);
    }

    #[test]
    fn scalar_fn_wraps_value_and_derivative() {
        let objective = ScalarFn::new(|x| (x - 3.0).powi(2), |x| 2.0 * (x - 3.0));

        assert_relative_eq!(objective.value(&[5.0]).unwrap(), 4.0);
        assert_relative_eq!(objective.gradient(&[5.0]).unwrap()[0], 4.0);
    }

    #[test]
    fn restriction_evaluates_along_direction() {
        let objective = bowl();
        let restriction = Restriction::new(&objective, [5.0, 5.0], [-10.0, -100.0]);

        // Zero step stays at the origin.
        assert_relative_eq!(restriction.value(&[0.0]).unwrap(), 275.0);

        // At a = 0.05 the point is (4.5, 0.0).
        let [x, y] = restriction.point_at(0.05);
        assert_relative_eq!(x, 4.5);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(restriction.value(&[0.05]).unwrap(), 20.25);
    }

    #[test]
    fn restriction_derivative_is_directional() {
        let objective = bowl();
        let restriction = Restriction::new(&objective, [5.0, 5.0], [-10.0, -100.0]);

        // ∇f(5, 5) = (10, 100), so φ'(0) = -(10² + 100²).
        assert_relative_eq!(restriction.gradient(&[0.0]).unwrap()[0], -10_100.0);
    }
}
