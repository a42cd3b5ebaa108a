//! Common comparison type for two operand types.
//!
//! Comparing an `f32` with an `f64`, or an integer with a float, happens in a
//! floating-point type wide enough to hold both operands without loss.
//! Comparing two integers at a fractional tolerance is meaningless, so no
//! integer/integer pair has a supertype and such calls fail to type-check:
//!
//! ```compile_fail
//! use fp_closeness::is_close_to;
//!
//! let _ = is_close_to(5_i32, 5_i32, 0.001);
//! ```

use crate::real::Real;

/// Selects the floating-point type two operands are compared in.
#[diagnostic::on_unimplemented(
    message = "only floating-point types can be compared: no supertype for `{Self}` and `{Rhs}`",
    label = "no floating-point supertype",
    note = "convert at least one operand to `f32` or `f64`"
)]
pub trait CompSupertype<Rhs> {
    /// Type both operands are promoted to.
    type Output: Real;

    /// Convert both operands into [`Self::Output`].
    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// Supertype of `L` and `R`.
pub type Supertype<L, R> = <L as CompSupertype<R>>::Output;

macro_rules! supertype {
    ($out:ty => $($a:ty, $b:ty);* $(;)?) => {$(
        impl CompSupertype<$b> for $a {
            type Output = $out;

            #[allow(
                clippy::cast_lossless,
                clippy::cast_precision_loss,
                clippy::unnecessary_cast,
                reason = "integers wider than the mantissa round to the nearest float"
            )]
            #[inline]
            fn promote(self, rhs: $b) -> ($out, $out) {
                (self as $out, rhs as $out)
            }
        }
    )*};
}

macro_rules! mixed_supertype {
    ($float:ty => $($int:ty),* $(,)?) => {$(
        supertype!($float => $int, $float; $float, $int);
    )*};
}

supertype!(f32 => f32, f32);
supertype!(f64 => f64, f64; f32, f64; f64, f32);

mixed_supertype!(f32 => i8, u8, i16, u16);
mixed_supertype!(f64 => i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

// No lossless conversion into `f32` exists for integers of 32 bits or more.
supertype!(f64 => i32, f32; f32, i32; u32, f32; f32, u32);
supertype!(f64 => i64, f32; f32, i64; u64, f32; f32, u64);
supertype!(f64 => isize, f32; f32, isize; usize, f32; f32, usize);
