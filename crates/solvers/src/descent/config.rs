use thiserror::Error;

use crate::scalar;

/// Configuration shared by the descent solvers.
///
/// - `tolerance`: the solver stops once the gradient norm drops below this
/// - `max_iters`: optional iteration limit, unbounded by default
/// - `line_search_tolerance`: bracket tolerance for the inner bisection; when
///   unset, DFP uses `1e-3` and the other solvers reuse `tolerance`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    tolerance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    max_iters: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    line_search_tolerance: Option<f64>,
}

/// Errors that can occur when validating descent solver settings.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
    #[error("line search tolerance must be finite and positive")]
    LineSearchTolerance,
    #[error("moving-average rate must be in [0, 1)")]
    Beta,
    #[error("step size must be finite and positive")]
    StepSize,
    #[error("epsilon must be finite and non-negative")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: None,
            line_search_tolerance: None,
        }
    }
}

impl Config {
    /// Creates a config with the given gradient-norm tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy of this config that stops after at most `max_iters` updates.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Returns a copy of this config with an explicit inner line-search tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn with_line_search_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        let config = Self {
            line_search_tolerance: Some(tolerance),
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is not finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.tolerance) {
            return Err(ConfigError::Tolerance);
        }
        if self.line_search_tolerance.is_some_and(|tol| !is_positive(tol)) {
            return Err(ConfigError::LineSearchTolerance);
        }
        Ok(())
    }

    /// Returns the gradient-norm tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration limit, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns the explicit inner line-search tolerance, if any.
    #[must_use]
    pub fn line_search_tolerance(&self) -> Option<f64> {
        self.line_search_tolerance
    }

    /// Returns `true` if `iters` updates have used up the iteration limit.
    pub(super) fn exhausted(&self, iters: usize) -> bool {
        self.max_iters.is_some_and(|max| iters >= max)
    }

    /// The inner bisection config, falling back to `default_tolerance`.
    pub(super) fn line_search(
        &self,
        default_tolerance: f64,
    ) -> Result<scalar::Config, ConfigError> {
        let tolerance = self.line_search_tolerance.unwrap_or(default_tolerance);
        scalar::Config::new(tolerance).map_err(|_| ConfigError::LineSearchTolerance)
    }
}

pub(super) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_iters(), None);
        assert_eq!(config.line_search_tolerance(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::INFINITY), Err(ConfigError::Tolerance));
        assert_eq!(
            Config::default().with_line_search_tolerance(-1.0),
            Err(ConfigError::LineSearchTolerance)
        );
    }

    #[test]
    fn line_search_falls_back_to_default() {
        let config = Config::default();
        let inner = config.line_search(1e-3).unwrap();
        assert!((inner.tolerance() - 1e-3).abs() < f64::EPSILON);

        let config = config.with_line_search_tolerance(1e-8).unwrap();
        let inner = config.line_search(1e-3).unwrap();
        assert!((inner.tolerance() - 1e-8).abs() < f64::EPSILON);
    }

    #[test]
    fn exhausted_only_with_limit() {
        assert!(!Config::default().exhausted(usize::MAX));

        let config = Config::default().with_max_iters(3);
        assert!(!config.exhausted(2));
        assert!(config.exhausted(3));
    }
}
