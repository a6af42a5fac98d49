use thiserror::Error;

/// Configuration shared by the scalar searches.
///
/// The search stops once the bracket width drops below `tolerance`.
/// `max_iters` is an optional safety valve; by default there is none.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    tolerance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a scalar search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: None,
        }
    }
}

impl Config {
    /// Creates a config with the given bracket-width tolerance and no iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iters: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy of this config that stops after at most `max_iters` iterations.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Validates the tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(())
    }

    /// Returns the bracket-width tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration limit, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let config = Config::default();
        assert_eq!(config.max_iters(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-3), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Tolerance));
    }

    #[test]
    fn with_max_iters_keeps_tolerance() {
        let config = Config::new(1e-4).unwrap().with_max_iters(7);
        assert_eq!(config.max_iters(), Some(7));
        assert!((config.tolerance() - 1e-4).abs() < f64::EPSILON);
    }
}
