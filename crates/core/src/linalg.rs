//! Fixed-dimension vector primitives.
//!
//! Points, gradients, and directions are plain `[f64; N]` arrays. Every
//! function returns a new value; callers rebind rather than mutate through
//! aliases.

/// Returns the dot product `aᵀb`.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Returns the Euclidean norm of `v`.
#[must_use]
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    dot(v, v).sqrt()
}

/// Returns `a + b`.
#[must_use]
pub fn add<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] + b[i])
}

/// Returns `a - b`.
#[must_use]
pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Returns `alpha * v`.
#[must_use]
pub fn scale<const N: usize>(alpha: f64, v: &[f64; N]) -> [f64; N] {
    v.map(|x| alpha * x)
}

/// Returns `alpha * x + y`.
#[must_use]
pub fn axpy<const N: usize>(alpha: f64, x: &[f64; N], y: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| alpha * x[i] + y[i])
}

/// Returns true if every component of `v` is finite.
#[must_use]
pub fn is_finite<const N: usize>(v: &[f64; N]) -> bool {
    v.iter().all(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn vector_primitives() {
        let a = [1.0, 2.0, 2.0];
        let b = [3.0, -1.0, 0.5];

        assert_relative_eq!(dot(&a, &b), 2.0);
        assert_relative_eq!(norm(&a), 3.0);
        assert_eq!(add(&a, &b), [4.0, 1.0, 2.5]);
        assert_eq!(sub(&a, &b), [-2.0, 3.0, 1.5]);
        assert_eq!(scale(2.0, &a), [2.0, 4.0, 4.0]);
        assert_eq!(axpy(-1.0, &b, &a), [-2.0, 3.0, 1.5]);
    }

    #[test]
    fn finiteness_checks() {
        assert!(is_finite(&[1.0, -2.0]));
        assert!(!is_finite(&[1.0, f64::INFINITY]));
        assert!(!is_finite(&[f64::NAN]));
    }
}
