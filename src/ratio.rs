//! Saturating division of non-negative values.
//!
//! Relative differences are ratios of magnitudes, and dividing near the edge
//! of the representable range can overflow to infinity or flush to zero.
//! [`safe_ratio`] clamps those cases deterministically to the type's maximum
//! or to zero so the tolerance comparison that follows stays meaningful.

use crate::real::Real;

/// Divide `numerator` by `denominator`, saturating instead of overflowing or
/// underflowing. Both operands must be non-negative.
///
/// - A quotient that would exceed [`Real::max_value`] yields the maximum.
/// - A zero numerator, or a quotient that would fall below
///   [`Real::min_positive`], yields zero.
///
/// The thresholds compare against the raw type bounds rather than anything
/// tolerance-aware; callers may depend on these exact saturation points.
///
/// # Examples
///
/// ```
/// use fp_closeness::safe_ratio;
///
/// assert_eq!(safe_ratio(1.0_f64, 4.0), 0.25);
/// assert_eq!(safe_ratio(1.0_f64, 0.0), f64::MAX);
/// assert_eq!(safe_ratio(0.0_f64, 0.0), 0.0);
/// ```
#[must_use]
pub fn safe_ratio<T: Real>(numerator: T, denominator: T) -> T {
    let one = T::one();
    if denominator < one && numerator > denominator * T::max_value() {
        return T::max_value();
    }
    if numerator.is_zero() || (denominator > one && numerator < denominator * T::min_positive()) {
        return T::zero();
    }
    numerator / denominator
}
