//! Absolute smallness checks.

use crate::{
    real::Real,
    tolerance::{ToleranceError, validate_tolerance},
};

/// Tests whether a value's magnitude is strictly below an absolute
/// tolerance.
///
/// # Examples
///
/// ```
/// use fp_closeness::SmallWithTolerance;
///
/// let small = SmallWithTolerance::new(1e-6_f64);
/// assert!(small.is_small(-5e-7));
/// assert!(!small.is_small(1e-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallWithTolerance<T> {
    tolerance: T,
}

impl<T: Real> SmallWithTolerance<T> {
    /// Build a check for the given absolute tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative or NaN.
    #[track_caller]
    #[must_use]
    pub fn new(tolerance: T) -> Self {
        match Self::try_new(tolerance) {
            Ok(check) => check,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a check, reporting an invalid tolerance instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns a [`ToleranceError`] if `tolerance` is negative or NaN.
    pub fn try_new(tolerance: T) -> Result<Self, ToleranceError> {
        validate_tolerance(tolerance).map(|tolerance| Self { tolerance })
    }

    /// The absolute tolerance.
    #[must_use]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Whether `|value| < tolerance`.
    #[must_use]
    pub fn is_small(&self, value: T) -> bool {
        value.magnitude() < self.tolerance
    }
}
