//! Euclidean helpers on `ndarray` vectors

use ndarray::prelude::*;

use crate::{OptimizeError, Result};

fn check_dims(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<()> {
    if a.len() != b.len() {
        return Err(OptimizeError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Euclidean norm of `v`.
pub fn norm(v: ArrayView1<f64>) -> f64 {
    v.dot(&v).sqrt()
}

/// Unit vector pointing from `a` to `b`.
///
/// When `a == b` the zero vector is returned unchanged.
///
/// # Errors
///
/// [`OptimizeError::DimensionMismatch`] if `a` and `b` differ in length.
pub fn direction(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<Array1<f64>> {
    check_dims(a, b)?;
    let diff = &b - &a;
    let len = norm(diff.view());
    if len > 0.0 {
        Ok(diff / len)
    } else {
        Ok(diff)
    }
}

/// Euclidean distance between `a` and `b`.
///
/// # Errors
///
/// [`OptimizeError::DimensionMismatch`] if `a` and `b` differ in length.
pub fn distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64> {
    check_dims(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (y - x) * (y - x))
        .sum::<f64>()
        .sqrt())
}

pub(crate) fn midpoint(a: &Array1<f64>, b: &Array1<f64>) -> Array1<f64> {
    (a + b) * 0.5
}

/// Point at fraction `t` of the way from `a` to `b`.
pub(crate) fn along(a: &Array1<f64>, b: &Array1<f64>, t: f64) -> Array1<f64> {
    a + &((b - a) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn direction_is_unit_length() {
        let dir = direction(array![1., 1.].view(), array![4., 5.].view()).unwrap();
        assert_abs_diff_eq!(dir, array![0.6, 0.8], epsilon = 1e-12);
        assert_abs_diff_eq!(norm(dir.view()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn direction_between_equal_points_is_zero() {
        let a = array![2., -3., 7.];
        let dir = direction(a.view(), a.view()).unwrap();
        assert_eq!(dir, array![0., 0., 0.]);
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(array![0., 0.].view(), array![3., 4.].view()).unwrap();
        assert_eq!(d, 5.0);
        let d = distance(array![5., 3.].view(), array![0., 0.].view()).unwrap();
        assert_abs_diff_eq!(d, 34f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn empty_against_non_empty() {
        let empty = Array1::<f64>::zeros(0);
        let one = array![1.];
        assert_eq!(
            distance(empty.view(), one.view()),
            Err(OptimizeError::DimensionMismatch { left: 0, right: 1 })
        );
        assert_eq!(
            direction(one.view(), empty.view()),
            Err(OptimizeError::DimensionMismatch { left: 1, right: 0 })
        );
        assert_eq!(distance(empty.view(), empty.view()), Ok(0.0));
    }

    #[test]
    fn midpoint_and_along() {
        let a = array![0., 2.];
        let b = array![4., -2.];
        assert_eq!(midpoint(&a, &b), array![2., 0.]);
        assert_eq!(along(&a, &b, 0.25), array![1., 1.]);
    }

    proptest! {
        #[test]
        fn mismatched_lengths_are_rejected(n in 0usize..8, m in 0usize..8) {
            prop_assume!(n != m);
            let a = Array1::<f64>::ones(n);
            let b = Array1::<f64>::ones(m);
            let expected = OptimizeError::DimensionMismatch { left: n, right: m };
            prop_assert_eq!(distance(a.view(), b.view()), Err(expected.clone()));
            prop_assert_eq!(direction(a.view(), b.view()), Err(expected));
        }
    }
}
