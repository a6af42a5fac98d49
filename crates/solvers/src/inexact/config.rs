use thiserror::Error;

/// Configuration for the step-acceptance rules.
///
/// - `rho`: sufficient-decrease parameter, in `(0, 0.5)`
/// - `sigma`: curvature parameter for Wolfe–Powell, in `(rho, 1)`
/// - `expand`: factor applied to a step that is too short, `> 1`
/// - `contract`: factor applied to a step that is too long, in `(0, 1)`
/// - `max_iters`: optional iteration limit, unbounded by default
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    rho: f64,
    sigma: f64,
    expand: f64,
    contract: f64,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a step-acceptance config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rho must be in (0, 0.5)")]
    Rho,
    #[error("sigma must be in (rho, 1)")]
    Sigma,
    #[error("expand factor must be finite and greater than 1")]
    Expand,
    #[error("contract factor must be in (0, 1)")]
    Contract,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rho: 0.08,
            sigma: 0.5,
            expand: 1.5,
            contract: 0.5,
            max_iters: None,
        }
    }
}

impl Config {
    /// Creates a config with the given acceptance parameters and the default
    /// expand/contract factors.
    ///
    /// # Errors
    ///
    /// Returns an error if `rho` or `sigma` is out of range.
    pub fn new(rho: f64, sigma: f64) -> Result<Self, ConfigError> {
        let config = Self {
            rho,
            sigma,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy of this config with new expand and contract factors.
    ///
    /// # Errors
    ///
    /// Returns an error if either factor is out of range.
    pub fn with_factors(self, expand: f64, contract: f64) -> Result<Self, ConfigError> {
        let config = Self {
            expand,
            contract,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy of this config that stops after at most `max_iters` trials.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Validates every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first parameter found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rho > 0.0 && self.rho < 0.5) {
            return Err(ConfigError::Rho);
        }
        if !(self.sigma > self.rho && self.sigma < 1.0) {
            return Err(ConfigError::Sigma);
        }
        if !(self.expand.is_finite() && self.expand > 1.0) {
            return Err(ConfigError::Expand);
        }
        if !(self.contract > 0.0 && self.contract < 1.0) {
            return Err(ConfigError::Contract);
        }
        Ok(())
    }

    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[must_use]
    pub fn expand(&self) -> f64 {
        self.expand
    }

    #[must_use]
    pub fn contract(&self) -> f64 {
        self.contract
    }

    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(Config::new(0.0, 0.5), Err(ConfigError::Rho));
        assert_eq!(Config::new(0.5, 0.9), Err(ConfigError::Rho));
        assert_eq!(Config::new(0.2, 0.1), Err(ConfigError::Sigma));
        assert_eq!(Config::new(0.2, 1.0), Err(ConfigError::Sigma));
        assert_eq!(Config::new(f64::NAN, 0.5), Err(ConfigError::Rho));

        let config = Config::default();
        assert_eq!(config.with_factors(1.0, 0.5), Err(ConfigError::Expand));
        assert_eq!(
            config.with_factors(f64::INFINITY, 0.5),
            Err(ConfigError::Expand)
        );
        assert_eq!(config.with_factors(2.0, 1.0), Err(ConfigError::Contract));
        assert_eq!(config.with_factors(2.0, 0.0), Err(ConfigError::Contract));
    }
}
