//! Tolerance-based closeness and smallness checks for floating-point values.
//!
//! Decides whether an observed value matches an expected one despite
//! rounding error, and by how much a failing comparison missed.
//!
//! ```
//! use fp_closeness::{CloseAtTolerance, Strength, is_close_to, is_small};
//!
//! assert!(is_close_to(1.0, 1.0009, 0.001));
//! assert!(is_small(1e-13, 1e-12));
//!
//! let close = CloseAtTolerance::new(0.01_f64, Strength::Weak);
//! assert!(close.matches(100.0, 99.0));
//! ```

pub mod api;
pub mod close;
pub mod config;
pub mod ratio;
pub mod real;
pub mod small;
pub mod supertype;
pub mod tolerance;

pub use api::{is_close_to, is_small};
pub use close::{CloseAtTolerance, Outcome, Strength};
pub use config::{ComparisonConfig, ConfigError, ToleranceSetting};
pub use ratio::safe_ratio;
pub use real::Real;
pub use small::SmallWithTolerance;
pub use supertype::{CompSupertype, Supertype};
pub use tolerance::{
    PercentTolerance, ToleranceError, ToleranceKind, fraction_to_percent, percent_tolerance,
};

pub mod tests;
