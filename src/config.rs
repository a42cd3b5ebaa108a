//! Serialisable comparison settings and their layered loading.
//!
//! A [`ComparisonConfig`] describes a tolerance and strength so a test suite
//! can keep its comparison policy outside the code. Settings load from a TOML
//! file, from environment variables prefixed with `FPC_` (nested keys split
//! on `__`, e.g. `FPC_TOLERANCE__VALUE`), or from both, with the environment
//! taking precedence.
//!
//! ```toml
//! strength = "weak"
//!
//! [tolerance]
//! kind = "percent"
//! value = 0.5
//! ```

use crate::{
    close::{CloseAtTolerance, Strength},
    real::Real,
    tolerance::{ToleranceError, validate_tolerance},
};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment variables read by [`ComparisonConfig`].
pub const ENV_PREFIX: &str = "FPC_";

/// Errors raised while loading or validating comparison settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("failed to load comparison settings: {0}")]
    Extract(#[from] Box<figment::Error>),
    /// The configured tolerance violates its contract.
    #[error("invalid tolerance: {0}")]
    Tolerance(#[from] ToleranceError),
}

/// How a configured tolerance is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ToleranceSetting {
    /// Relative error as a plain fraction.
    Fraction { value: f64 },
    /// Relative error in percent.
    Percent { value: f64 },
}

impl ToleranceSetting {
    /// The tolerance as a fraction.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "percent to fraction")]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Fraction { value } => value,
            Self::Percent { value } => value * 0.01,
        }
    }
}

/// Tolerance and strength for a comparison site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Relative error threshold.
    pub tolerance: ToleranceSetting,
    /// Comparison method; `strong` when omitted.
    #[serde(default)]
    pub strength: Strength,
}

impl ComparisonConfig {
    /// Ensure the tolerance is non-negative and a number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if the tolerance is negative or NaN.
    #[must_use = "Validation should not be ignored"]
    pub fn validate(self) -> Result<Self, ConfigError> {
        validate_tolerance(self.tolerance.fraction())?;
        Ok(self)
    }

    /// Build a comparison engine for values of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if the tolerance is invalid.
    pub fn engine<T: Real>(&self) -> Result<CloseAtTolerance<T>, ConfigError> {
        let fraction = T::from_f64(self.tolerance.fraction());
        Ok(CloseAtTolerance::try_new(fraction, self.strength)?)
    }

    /// Load settings solely from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable cannot be parsed or the
    /// tolerance is invalid.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        tracing::debug!(prefix = ENV_PREFIX, "loading comparison settings from environment");
        Self::extract(Figment::new().merge(env_provider()))
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or the
    /// tolerance is invalid.
    pub fn load_from_config(path: &str) -> Result<Self, ConfigError> {
        tracing::debug!(path, "loading comparison settings from file");
        Self::extract(Figment::new().merge(Toml::file(path)))
    }

    /// Load settings from a TOML file overridden by environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either source contains invalid values.
    pub fn load_from_env_and_config(path: &str) -> Result<Self, ConfigError> {
        tracing::debug!(
            path,
            prefix = ENV_PREFIX,
            "loading comparison settings from file and environment"
        );
        Self::extract(
            Figment::new()
                .merge(Toml::file(path))
                .merge(env_provider()),
        )
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .extract::<Self>()
            .map_err(Box::new)?
            .validate()
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::approx_eq;
    use rstest::rstest;

    #[rstest]
    fn serialise_percent() {
        let cfg = ComparisonConfig {
            tolerance: ToleranceSetting::Percent { value: 0.5 },
            strength: Strength::Weak,
        };
        #[expect(clippy::expect_used, reason = "test should fail loudly")]
        let json = serde_json::to_string(&cfg).expect("serialise ComparisonConfig to JSON");
        assert_eq!(
            json,
            r#"{"tolerance":{"kind":"percent","value":0.5},"strength":"weak"}"#
        );
    }

    #[rstest]
    fn deserialise_defaults_to_strong() {
        let json = r#"{"tolerance":{"kind":"fraction","value":0.001}}"#;
        #[expect(clippy::expect_used, reason = "test should fail loudly")]
        let cfg: ComparisonConfig = serde_json::from_str(json).expect("deserialise config");
        assert_eq!(cfg.strength, Strength::Strong);
        assert_eq!(cfg.tolerance, ToleranceSetting::Fraction { value: 0.001 });
    }

    #[rstest]
    #[case(r#"{"tolerance":{"kind":"ulps","value":4}}"#)]
    #[case(r#"{"tolerance":{"kind":"fraction","value":0.1},"strength":"medium"}"#)]
    #[case(r#"{"tolerance":{"kind":"fraction","value":0.1},"extra":1}"#)]
    fn deserialise_invalid(#[case] json: &str) {
        let cfg: Result<ComparisonConfig, _> = serde_json::from_str(json);
        assert!(cfg.is_err());
    }

    #[rstest]
    #[case(ToleranceSetting::Fraction { value: 0.002 }, 0.002)]
    #[case(ToleranceSetting::Percent { value: 0.2 }, 0.002)]
    fn setting_converts_to_fraction(#[case] setting: ToleranceSetting, #[case] expected: f64) {
        assert!(approx_eq(setting.fraction(), expected, 1e-15));
    }

    #[rstest]
    fn validate_rejects_negative_tolerance() {
        let cfg = ComparisonConfig {
            tolerance: ToleranceSetting::Percent { value: -1.0 },
            strength: Strength::Strong,
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Tolerance(ToleranceError::Negative))
        ));
    }

    #[rstest]
    fn engine_follows_settings() {
        let cfg = ComparisonConfig {
            tolerance: ToleranceSetting::Percent { value: 1.0 },
            strength: Strength::Weak,
        };
        let engine = cfg
            .engine::<f32>()
            .unwrap_or_else(|e| panic!("unexpected config error: {e}"));
        assert_eq!(engine.strength(), Strength::Weak);
        assert!(engine.matches(100.0, 99.5));
        assert!(!engine.matches(100.0, 97.0));
    }
}
