//! Tolerance presentations.
//!
//! A tolerance is a non-negative relative error threshold. Internally it is
//! always a plain fraction (`0.001` is 0.1%), but callers may express it as a
//! percentage with [`PercentTolerance`]. [`ToleranceKind`] converts between a
//! presentation and the fraction the comparison engine works with.

use crate::real::Real;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when a tolerance violates its contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    /// The tolerance is below zero.
    #[error("tolerance must not be negative")]
    Negative,
    /// The tolerance is not ordered against zero (e.g. NaN).
    #[error("tolerance must be a number")]
    NotANumber,
}

/// Check that `tolerance` is a usable threshold, i.e. `tolerance >= 0`.
///
/// # Errors
///
/// Returns [`ToleranceError::Negative`] for values below zero and
/// [`ToleranceError::NotANumber`] for values that do not compare with zero.
pub fn validate_tolerance<T: Real>(tolerance: T) -> Result<T, ToleranceError> {
    match tolerance.partial_cmp(&T::zero()) {
        Some(std::cmp::Ordering::Less) => Err(ToleranceError::Negative),
        Some(_) => Ok(tolerance),
        None => Err(ToleranceError::NotANumber),
    }
}

/// A way of expressing a tolerance that converts to and from a fraction.
pub trait ToleranceKind<T: Real>: Copy {
    /// The tolerance as a plain fraction.
    fn fraction(self) -> T;

    /// Present `fraction` in this form.
    fn from_fraction(fraction: T) -> Self;
}

/// A bare value is already a fraction.
impl<T: Real> ToleranceKind<T> for T {
    #[inline]
    fn fraction(self) -> T {
        self
    }

    #[inline]
    fn from_fraction(fraction: T) -> Self {
        fraction
    }
}

/// A tolerance expressed in percent; `1.0` means 1%, i.e. a fraction of
/// `0.01`.
///
/// # Examples
///
/// ```
/// use fp_closeness::{percent_tolerance, ToleranceKind};
///
/// let t = percent_tolerance(0.1_f64);
/// assert!((t.fraction() - 0.001).abs() < 1e-15);
/// assert_eq!(t.to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentTolerance<T> {
    value: T,
}

impl<T> PercentTolerance<T> {
    /// Wrap a percentage value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Copy> PercentTolerance<T> {
    /// The percentage value as given.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: Real> ToleranceKind<T> for PercentTolerance<T> {
    #[inline]
    fn fraction(self) -> T {
        self.value * T::from_f64(0.01)
    }

    #[inline]
    fn from_fraction(fraction: T) -> Self {
        Self::new(fraction * T::from_f64(100.0))
    }
}

impl<T: fmt::Display> fmt::Display for PercentTolerance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Build a percentage tolerance.
#[must_use]
pub const fn percent_tolerance<T>(value: T) -> PercentTolerance<T> {
    PercentTolerance::new(value)
}

/// Present a fraction as a percentage tolerance.
#[must_use]
pub fn fraction_to_percent<T: Real>(fraction: T) -> PercentTolerance<T> {
    PercentTolerance::from_fraction(fraction)
}
