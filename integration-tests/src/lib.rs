//! Shared fixtures for the integration tests.

pub mod objectives {
    use std::convert::Infallible;

    use descent_core::{Objective, linalg};
    use thiserror::Error;

    /// An axis-aligned quadratic bowl `a·x² + b·y²` with its minimum at the origin.
    #[derive(Debug, Clone, Copy)]
    pub struct Bowl {
        pub a: f64,
        pub b: f64,
    }

    impl Bowl {
        /// The bowl `x² + 10y²`.
        pub fn elongated() -> Self {
            Self { a: 1.0, b: 10.0 }
        }
    }

    impl Objective<2> for Bowl {
        type Error = Infallible;

        fn value(&self, [x, y]: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok(self.a * x * x + self.b * y * y)
        }

        fn gradient(&self, [x, y]: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            Ok([2.0 * self.a * x, 2.0 * self.b * y])
        }
    }

    /// Error returned by [`Bounded`] outside its trust region.
    #[derive(Debug, Error, PartialEq)]
    #[error("point is {distance} from the origin, beyond radius {radius}")]
    pub struct OutOfBounds {
        pub distance: f64,
        pub radius: f64,
    }

    /// Wraps an objective so that it fails outside a ball around the origin.
    #[derive(Debug, Clone, Copy)]
    pub struct Bounded<O> {
        pub inner: O,
        pub radius: f64,
    }

    impl<O> Bounded<O> {
        fn check<const N: usize>(&self, x: &[f64; N]) -> Result<(), OutOfBounds> {
            let distance = linalg::norm(x);
            if distance > self.radius {
                return Err(OutOfBounds {
                    distance,
                    radius: self.radius,
                });
            }
            Ok(())
        }
    }

    impl<O, const N: usize> Objective<N> for Bounded<O>
    where
        O: Objective<N, Error = Infallible>,
    {
        type Error = OutOfBounds;

        fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
            self.check(x)?;
            let Ok(value) = self.inner.value(x);
            Ok(value)
        }

        fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
            self.check(x)?;
            let Ok(gradient) = self.inner.gradient(x);
            Ok(gradient)
        }
    }
}

pub mod settings {
    use descent_solvers::{
        descent::{self, momentum, rmsprop},
        inexact, scalar,
    };
    use serde::{Deserialize, Serialize};

    /// Every tunable in the library, as a front end might load it from a file.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Settings {
        pub scalar: scalar::Config,
        pub inexact: inexact::Config,
        pub descent: descent::Config,
        pub momentum: momentum::Params,
        pub rmsprop: rmsprop::Params,
    }
}
