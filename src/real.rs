//! Numeric capability set required by the closeness checks.
//!
//! [`Real`] captures what the comparison algorithms need from a value:
//! ordering, subtraction, negation, multiplication, division and the
//! representable positive bounds used to saturate ratios. It is implemented
//! for `f32` and `f64`; user-defined numeric types implement it directly and
//! may fall back to the default bounds when they have no natural limits.

use num_traits::{One, Zero};
use std::ops::{Div, Mul, Neg, Sub};

/// Upper bound reported for types without defined limits. Any large value
/// serves, it only needs to dominate the ratios being compared.
pub const UNBOUNDED_MAX: f64 = 1_000_000.0;

/// A real-number-like value that can be compared at a tolerance.
pub trait Real:
    Copy
    + PartialOrd
    + Zero
    + One
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Convert a literal constant such as `0.01` into this type.
    fn from_f64(value: f64) -> Self;

    /// Largest representable positive value.
    #[must_use]
    fn max_value() -> Self {
        Self::from_f64(UNBOUNDED_MAX)
    }

    /// Smallest representable positive value; zero when unknown.
    #[must_use]
    fn min_positive() -> Self {
        Self::zero()
    }

    /// Absolute value expressed through ordering and negation only.
    #[must_use]
    fn magnitude(self) -> Self {
        if self < Self::zero() { -self } else { self }
    }
}

macro_rules! impl_real {
    ($($ty:ty),* $(,)?) => {$(
        impl Real for $ty {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::unnecessary_cast,
                reason = "literal constants are representable in every width"
            )]
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn max_value() -> Self {
                <$ty>::MAX
            }

            #[inline]
            fn min_positive() -> Self {
                <$ty>::MIN_POSITIVE
            }
        }
    )*};
}

impl_real!(f32, f64);
