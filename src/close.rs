//! Relative closeness of two values at a tolerance.
//!
//! Two relative differences are computed, one against each operand:
//! `|a - b| / |b|` and `|a - b| / |a|`. They differ sharply when one operand
//! is near zero, so the comparison method decides how to combine them:
//!
//! - [`Strength::Strong`] ("very close") requires both to be within the
//!   tolerance.
//! - [`Strength::Weak`] ("close enough") requires at least one of them to be
//!   within the tolerance.
//!
//! When a comparison fails the engine reports the fraction responsible so an
//! assertion layer can say how far off the values were.

use crate::{
    ratio::safe_ratio,
    real::Real,
    tolerance::{ToleranceError, ToleranceKind, validate_tolerance},
};
use serde::{Deserialize, Serialize};
use std::{cell::Cell, fmt};

/// Method used to combine the two relative differences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// Both relative differences must be within tolerance.
    #[default]
    Strong,
    /// Either relative difference may be within tolerance.
    Weak,
}

impl Strength {
    /// The other comparison method.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Strong => Self::Weak,
            Self::Weak => Self::Strong,
        }
    }
}

/// Result of a single comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<T> {
    /// Whether the comparison (after any negation) holds.
    pub passed: bool,
    /// The fraction responsible for a failure; `None` when `passed`.
    pub failed_fraction: Option<T>,
}

impl<T> Outcome<T> {
    const fn pass() -> Self {
        Self {
            passed: true,
            failed_fraction: None,
        }
    }

    const fn fail(fraction: T) -> Self {
        Self {
            passed: false,
            failed_fraction: Some(fraction),
        }
    }
}

/// Compares values against a relative tolerance using a fixed [`Strength`].
///
/// The engine is built per comparison site. [`evaluate`](Self::evaluate)
/// returns a structured [`Outcome`] and leaves the engine untouched.
/// [`compare`](Self::compare) returns a bare `bool` and keeps the last failing
/// fraction for [`failed_fraction`](Self::failed_fraction); that state lives
/// in a [`Cell`], so an engine cannot be shared between threads.
///
/// # Examples
///
/// ```
/// use fp_closeness::{CloseAtTolerance, Strength};
///
/// let close = CloseAtTolerance::new(0.001_f64, Strength::Strong);
/// assert!(close.matches(1.0, 1.0009));
/// assert!(!close.matches(1.0, 1.002));
/// let missed_by = close.failed_fraction().unwrap();
/// assert!((missed_by - 0.002).abs() < 1e-5);
/// ```
pub struct CloseAtTolerance<T> {
    fraction: T,
    strength: Strength,
    failed: Cell<Option<T>>,
}

impl<T: Real + fmt::Debug> fmt::Debug for CloseAtTolerance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseAtTolerance")
            .field("fraction", &self.fraction)
            .field("strength", &self.strength)
            .field("failed", &self.failed.get())
            .finish()
    }
}

impl<T: Real> Clone for CloseAtTolerance<T> {
    fn clone(&self) -> Self {
        Self {
            fraction: self.fraction,
            strength: self.strength,
            failed: Cell::new(self.failed.get()),
        }
    }
}

impl<T: Real> CloseAtTolerance<T> {
    /// Build an engine from any tolerance presentation.
    ///
    /// # Panics
    ///
    /// Panics if the tolerance is negative or NaN; passing one is a
    /// programming error.
    #[track_caller]
    #[must_use]
    pub fn new<K: ToleranceKind<T>>(tolerance: K, strength: Strength) -> Self {
        match Self::try_new(tolerance, strength) {
            Ok(engine) => engine,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build an engine, reporting an invalid tolerance instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns a [`ToleranceError`] if the tolerance is negative or NaN.
    pub fn try_new<K: ToleranceKind<T>>(
        tolerance: K,
        strength: Strength,
    ) -> Result<Self, ToleranceError> {
        let fraction = validate_tolerance(tolerance.fraction())?;
        Ok(Self {
            fraction,
            strength,
            failed: Cell::new(None),
        })
    }

    /// The tolerance as a fraction.
    #[must_use]
    pub fn fraction_tolerance(&self) -> T {
        self.fraction
    }

    /// The tolerance in the requested presentation.
    ///
    /// ```
    /// use fp_closeness::{CloseAtTolerance, PercentTolerance, Strength};
    ///
    /// let close = CloseAtTolerance::new(0.02_f64, Strength::Weak);
    /// let percent: PercentTolerance<f64> = close.tolerance_as();
    /// assert!((percent.value() - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn tolerance_as<K: ToleranceKind<T>>(&self) -> K {
        K::from_fraction(self.fraction)
    }

    /// The comparison method.
    #[must_use]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// The fraction recorded by the most recent failing
    /// [`compare`](Self::compare), if any.
    #[must_use]
    pub fn failed_fraction(&self) -> Option<T> {
        self.failed.get()
    }

    /// Compare `left` and `right` without touching the engine's state.
    ///
    /// `negate` marks the comparison as part of a negated assertion ("not
    /// close"). It flips both the effective strength and the final result, so
    /// the recorded fraction is the one behind the unexpected outcome.
    #[must_use]
    pub fn evaluate(&self, left: T, right: T, negate: bool) -> Outcome<T> {
        let diff = (left - right).magnitude();
        let of_right = safe_ratio(diff, right.magnitude());
        let of_left = safe_ratio(diff, left.magnitude());
        let tolerance = self.fraction;

        let strong = (self.strength == Strength::Strong) ^ negate;
        let within = if strong {
            of_right <= tolerance && of_left <= tolerance
        } else {
            of_right <= tolerance || of_left <= tolerance
        };

        if within ^ negate {
            return Outcome::pass();
        }

        let failed = if strong {
            min(of_left, of_right)
        } else if of_right > tolerance {
            if of_left > tolerance {
                min(of_left, of_right)
            } else {
                of_right
            }
        } else {
            of_left
        };
        Outcome::fail(failed)
    }

    /// Compare `left` and `right`, recording the failing fraction on failure.
    pub fn compare(&self, left: T, right: T, negate: bool) -> bool {
        let outcome = self.evaluate(left, right, negate);
        if let Some(fraction) = outcome.failed_fraction {
            tracing::trace!(
                strength = ?self.strength,
                negate,
                "values are not within tolerance"
            );
            self.failed.set(Some(fraction));
        }
        outcome.passed
    }

    /// Shorthand for a non-negated [`compare`](Self::compare).
    pub fn matches(&self, left: T, right: T) -> bool {
        self.compare(left, right, false)
    }
}

fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}
