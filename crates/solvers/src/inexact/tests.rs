use std::convert::Infallible;

use approx::assert_relative_eq;
use descent_core::{Objective, Restriction, ScalarFn};

use super::*;

/// `x² + 10y²`.
struct Bowl;

impl Objective<2> for Bowl {
    type Error = Infallible;

    fn value(&self, [x, y]: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(x * x + 10.0 * y * y)
    }

    fn gradient(&self, [x, y]: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Ok([2.0 * x, 20.0 * y])
    }
}

/// The bowl restricted to the steepest-descent ray from `(5, 5)`.
fn steepest_descent_ray() -> Restriction<'static, Bowl, 2> {
    let origin = [5.0, 5.0];
    let [gx, gy] = Bowl.gradient(&origin).unwrap();
    Restriction::new(&Bowl, origin, [-gx, -gy])
}

fn shifted_parabola() -> ScalarFn<impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
    ScalarFn::new(|a: f64| (a - 2.0).powi(2), |a: f64| 2.0 * (a - 2.0))
}

#[test]
fn goldstein_contracts_an_overlong_step() {
    let ray = steepest_descent_ray();

    let solution = goldstein::search_unobserved(&ray, 1.0, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Accepted);
    assert_eq!(solution.iters, 5);
    assert_relative_eq!(solution.step, 0.0625);
}

#[test]
fn wolfe_powell_contracts_an_overlong_step() {
    let ray = steepest_descent_ray();

    let solution = wolfe_powell::search_unobserved(&ray, 1.0, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Accepted);
    assert_eq!(solution.iters, 5);
    assert_relative_eq!(solution.step, 0.0625);
}

#[test]
fn timid_steps_are_expanded() {
    let ray = steepest_descent_ray();
    let config = Config::default();

    let goldstein = goldstein::search_unobserved(&ray, 0.001, &config).unwrap();
    assert_eq!(goldstein.iters, 7);
    assert_relative_eq!(goldstein.step, 0.011_390_625, epsilon = 1e-12);

    let wolfe = wolfe_powell::search_unobserved(&ray, 0.001, &config).unwrap();
    assert_eq!(wolfe.iters, 9);
    assert_relative_eq!(wolfe.step, 0.025_628_906_25, epsilon = 1e-12);
}

#[test]
fn rules_differ_on_a_parabola() {
    let objective = shifted_parabola();
    let config = Config::default();

    let goldstein = goldstein::search_unobserved(&objective, 0.1, &config).unwrap();
    assert_eq!(goldstein.iters, 4);
    assert_relative_eq!(goldstein.step, 0.3375, epsilon = 1e-12);

    let wolfe = wolfe_powell::search_unobserved(&objective, 0.1, &config).unwrap();
    assert_eq!(wolfe.iters, 7);
    assert_relative_eq!(wolfe.step, 1.139_062_5, epsilon = 1e-12);
}

#[test]
fn acceptable_initial_step_is_kept() {
    let objective = shifted_parabola();
    let config = Config::default();

    for solution in [
        goldstein::search_unobserved(&objective, 1.0, &config).unwrap(),
        wolfe_powell::search_unobserved(&objective, 1.0, &config).unwrap(),
    ] {
        assert_eq!(solution.status, Status::Accepted);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.step, 1.0);
    }
}

#[test]
fn ascent_direction_hits_iteration_limit() {
    // Increasing along the ray, so no step ever gives sufficient decrease.
    let objective = ScalarFn::new(|a: f64| a, |_| 1.0);
    let config = Config::default().with_max_iters(20);

    let solution = goldstein::search_unobserved(&objective, 1.0, &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 20);
}

#[test]
fn observer_sees_decreases_and_can_stop() {
    let ray = steepest_descent_ray();
    let mut steps = Vec::new();

    let solution = wolfe_powell::search(&ray, 1.0, &Config::default(), |event: &Event| {
        steps.push(event.step);
        assert!(event.decrease.is_finite());
        (event.iter == 2).then_some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(steps, vec![1.0, 0.5]);
}

#[test]
fn invalid_initial_step_is_rejected() {
    let objective = shifted_parabola();
    let config = Config::default();

    for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            goldstein::search_unobserved(&objective, step, &config),
            Err(Error::InvalidStep(_))
        ));
    }
}

#[test]
fn non_finite_trial_value_is_reported() {
    // Blows up past a = 0.5.
    let objective = ScalarFn::new(
        |a: f64| if a > 0.5 { f64::INFINITY } else { -a },
        |_| -1.0,
    );

    let result = goldstein::search_unobserved(&objective, 1.0, &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteValue { step }) if step == 1.0));
}
