//! One-shot entry points.
//!
//! These build a throwaway checker per call. Use [`CloseAtTolerance`]
//! directly when the failing fraction or a non-default strength is needed.

use crate::{
    close::{CloseAtTolerance, Strength},
    real::Real,
    small::SmallWithTolerance,
    supertype::{CompSupertype, Supertype},
    tolerance::ToleranceKind,
};

/// Whether `left` and `right` are very close (both relative differences
/// within `tolerance`).
///
/// The operands are promoted to their common floating-point
/// [`Supertype`] first; two integer operands are rejected at compile time.
///
/// The tolerance is not converted: a raw tolerance must already have the
/// supertype, so comparing two `f32` values takes an `f32` (or
/// `PercentTolerance<f32>`) tolerance. Unsuffixed float literals adapt on
/// their own.
///
/// ```compile_fail
/// use fp_closeness::is_close_to;
///
/// let _ = is_close_to(1.0_f32, 1.0_f32, 0.001_f64);
/// ```
///
/// # Examples
///
/// ```
/// use fp_closeness::{is_close_to, percent_tolerance};
///
/// assert!(is_close_to(1.0, 1.0009, 0.001));
/// assert!(!is_close_to(1.0, 1.002, 0.001));
/// assert!(is_close_to(2_u8, 2.001_f32, percent_tolerance(0.1_f32)));
/// ```
///
/// # Panics
///
/// Panics if `tolerance` is negative or NaN.
#[track_caller]
#[must_use]
pub fn is_close_to<L, R, K>(left: L, right: R, tolerance: K) -> bool
where
    L: CompSupertype<R>,
    K: ToleranceKind<Supertype<L, R>>,
{
    let (left, right) = left.promote(right);
    CloseAtTolerance::new(tolerance, Strength::Strong).matches(left, right)
}

/// Whether `|value| < tolerance`.
///
/// # Examples
///
/// ```
/// use fp_closeness::is_small;
///
/// assert!(is_small(0.0, 1e-12));
/// assert!(!is_small(0.0, 0.0));
/// ```
///
/// # Panics
///
/// Panics if `tolerance` is negative or NaN.
#[track_caller]
#[must_use]
pub fn is_small<T: Real>(value: T, tolerance: T) -> bool {
    SmallWithTolerance::new(tolerance).is_small(value)
}
