//! Rank-2 curvature updates for the quasi-Newton solvers.
//!
//! Each update divides by two inner products. Both must be strictly positive
//! and finite; otherwise the offending denominator is returned as the error.

use nalgebra::SVector;

use super::Matrix;

/// DFP update of the inverse-Hessian approximation `h`:
///
/// `h + s·sᵀ / (sᵀy) − (h·y)(yᵀ·h) / (yᵀ·h·y)`
pub(super) fn dfp<const N: usize>(
    h: &Matrix<N>,
    s: &SVector<f64, N>,
    y: &SVector<f64, N>,
) -> Result<Matrix<N>, f64> {
    let sy = checked(s.dot(y))?;
    let hy = h * y;
    let yhy = checked(y.dot(&hy))?;

    let step_term = s * s.transpose() / sy;
    let hessian_term = &hy * (y.transpose() * h) / yhy;
    Ok(h + step_term - hessian_term)
}

/// BFGS update of the Hessian approximation `b`:
///
/// `b + y·yᵀ / (yᵀs) − (b·s)(sᵀ·b) / (sᵀ·b·s)`
pub(super) fn bfgs<const N: usize>(
    b: &Matrix<N>,
    s: &SVector<f64, N>,
    y: &SVector<f64, N>,
) -> Result<Matrix<N>, f64> {
    let ys = checked(y.dot(s))?;
    let bs = b * s;
    let sbs = checked(s.dot(&bs))?;

    let gradient_term = y * y.transpose() / ys;
    let hessian_term = &bs * (s.transpose() * b) / sbs;
    Ok(b + gradient_term - hessian_term)
}

/// Inverts `m`, treating a non-finite inverse as singular.
pub(super) fn inverse<const N: usize>(m: &Matrix<N>) -> Option<Matrix<N>> {
    m.try_inverse().filter(|inv| inv.iter().all(|v| v.is_finite()))
}

pub(super) fn is_finite<const N: usize>(m: &Matrix<N>) -> bool {
    m.iter().all(|v| v.is_finite())
}

fn checked(denominator: f64) -> Result<f64, f64> {
    if denominator.is_finite() && denominator > 0.0 {
        Ok(denominator)
    } else {
        Err(denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dfp_satisfies_secant_condition() {
        let h = Matrix::<2>::identity();
        let s = SVector::from([1.0, 0.5]);
        let y = SVector::from([2.0, 3.0]);

        let updated = dfp(&h, &s, &y).unwrap();
        let hy = updated * y;

        assert_relative_eq!(hy[0], s[0], epsilon = 1e-12);
        assert_relative_eq!(hy[1], s[1], epsilon = 1e-12);
    }

    #[test]
    fn bfgs_satisfies_secant_condition() {
        let b = Matrix::<2>::identity();
        let s = SVector::from([1.0, 0.5]);
        let y = SVector::from([2.0, 3.0]);

        let updated = bfgs(&b, &s, &y).unwrap();
        let bs = updated * s;

        assert_relative_eq!(bs[0], y[0], epsilon = 1e-12);
        assert_relative_eq!(bs[1], y[1], epsilon = 1e-12);
    }

    #[test]
    fn updates_stay_symmetric() {
        let h = Matrix::<2>::new(2.0, 0.5, 0.5, 1.0);
        let s = SVector::from([0.3, -0.2]);
        let y = SVector::from([0.5, 0.1]);

        let updated = dfp(&h, &s, &y).unwrap();
        assert_relative_eq!(updated[(0, 1)], updated[(1, 0)], epsilon = 1e-12);

        let updated = bfgs(&h, &s, &y).unwrap();
        assert_relative_eq!(updated[(0, 1)], updated[(1, 0)], epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_positive_curvature() {
        let h = Matrix::<2>::identity();
        let e0 = SVector::from([1.0, 0.0]);

        assert_eq!(dfp(&h, &e0, &SVector::from([0.0, 1.0])), Err(0.0));
        assert_eq!(bfgs(&h, &e0, &SVector::from([-2.0, 0.0])), Err(-2.0));
        assert!(
            dfp(&h, &e0, &SVector::from([f64::NAN, 0.0]))
                .unwrap_err()
                .is_nan()
        );
    }

    #[test]
    fn inverse_of_symmetric_matrix() {
        let inv = inverse(&Matrix::<2>::new(4.0, 1.0, 1.0, 3.0)).unwrap();

        // det = 11
        let expected = Matrix::<2>::new(3.0, -1.0, -1.0, 4.0) / 11.0;
        assert_relative_eq!(inv, expected, epsilon = 1e-12);
    }

    #[test]
    fn inverse_rejects_singular_matrices() {
        assert!(inverse(&Matrix::<2>::new(1.0, 2.0, 2.0, 4.0)).is_none());
        assert!(inverse(&Matrix::<2>::new(1.0, 0.0, 0.0, 0.0)).is_none());
        assert!(!is_finite(&Matrix::<2>::new(f64::NAN, 0.0, 0.0, 1.0)));
    }
}
