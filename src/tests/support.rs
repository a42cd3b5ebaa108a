//! Absolute-difference comparison for checking computed fractions.

use crate::real::Real;

/// Whether `a` and `b` differ by strictly less than `tol`.
///
/// ```
/// use fp_closeness::tests::support::approx_eq;
///
/// assert!(approx_eq(0.1_f64 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0_f32, 1.1, 0.01));
/// ```
#[must_use]
pub fn approx_eq<T: Real>(a: T, b: T, tol: T) -> bool {
    (a - b).magnitude() < tol
}
