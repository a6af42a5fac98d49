use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
}

/// A search interval `[left, right]` with `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bracket {
    /// Creates a bracket from two endpoints.
    ///
    /// If the endpoints are reversed, they are swapped.
    /// Equal endpoints are allowed and give a zero-width bracket.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] if either endpoint is NaN or infinite.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { left, right })
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bracket as `[left, right]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reorders_reversed_endpoints() {
        let bracket = Bracket::new([3.0, -1.0]).expect("valid bracket");

        assert_relative_eq!(bracket.left(), -1.0);
        assert_relative_eq!(bracket.right(), 3.0);
        assert_relative_eq!(bracket.width(), 4.0);
        assert_relative_eq!(bracket.midpoint(), 1.0);
    }

    #[test]
    fn allows_zero_width() {
        let bracket = Bracket::new([2.0, 2.0]).expect("valid bracket");
        assert_relative_eq!(bracket.width(), 0.0);
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Bracket::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bracket::new([0.0, f64::NEG_INFINITY]),
            Err(BracketError::NonFinite)
        );
    }
}
