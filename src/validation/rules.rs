//! Deployment-specific validation limits

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ValidationError;
use crate::types::STANDARD_DISTANCES;
use crate::{Result, TimeError};

/// Upper bound of a practice rep count.
pub const MAX_REP_COUNT: u32 = 100;
/// Upper bound of a practice set count.
pub const MAX_SET_COUNT: u32 = 50;
/// Upper bound of a practice circle, in seconds.
pub const MAX_CIRCLE_SECONDS: u32 = 600;

/// Configurable limits for race and practice entry.
///
/// Missing keys fall back to the defaults, so a file only needs to name what
/// it overrides:
///
/// ```rust
/// use swimtime::validation::ValidationRules;
///
/// let rules = ValidationRules::from_yaml("max_rep_count: 40\n").unwrap();
/// assert_eq!(rules.max_rep_count, 40);
/// assert_eq!(rules.allowed_distances, vec![25, 50, 100, 200, 400, 800, 1500]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct ValidationRules {
    /// Race distances in meters
    pub allowed_distances: Vec<u32>,
    pub max_rep_count: u32,
    pub max_set_count: u32,
    pub max_circle_seconds: u32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            allowed_distances: STANDARD_DISTANCES.to_vec(),
            max_rep_count: MAX_REP_COUNT,
            max_set_count: MAX_SET_COUNT,
            max_circle_seconds: MAX_CIRCLE_SECONDS,
        }
    }
}

static STANDARD_RULES: LazyLock<ValidationRules> = LazyLock::new(ValidationRules::default);

impl ValidationRules {
    /// Shared instance of the default rules used by the free validators.
    pub fn standard() -> &'static ValidationRules {
        &STANDARD_RULES
    }

    /// Load rules from YAML and check them for consistency.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let rules: ValidationRules = serde_yaml_ng::from_str(yaml)?;
        rules.check()?;
        debug!(
            distances = rules.allowed_distances.len(),
            max_rep_count = rules.max_rep_count,
            max_set_count = rules.max_set_count,
            max_circle_seconds = rules.max_circle_seconds,
            "Loaded validation rules"
        );
        Ok(rules)
    }

    /// Reject rule sets that no input could satisfy.
    pub fn check(&self) -> Result<()> {
        if self.allowed_distances.is_empty() {
            return Err(TimeError::config("allowed_distances", "at least one distance is required"));
        }
        if self.allowed_distances.contains(&0) {
            return Err(TimeError::config("allowed_distances", "distances must be positive"));
        }
        for (name, value) in [
            ("max_rep_count", self.max_rep_count),
            ("max_set_count", self.max_set_count),
            ("max_circle_seconds", self.max_circle_seconds),
        ] {
            if value == 0 {
                return Err(TimeError::config(name, "must be greater than zero"));
            }
        }
        Ok(())
    }

    pub(crate) fn check_distance(&self, distance: u32) -> Result<(), ValidationError> {
        if self.allowed_distances.contains(&distance) {
            return Ok(());
        }
        Err(ValidationError::DistanceNotAllowed { allowed: self.allowed_distances.clone() })
    }

    pub(crate) fn check_rep_count(&self, count: f64) -> Result<(), ValidationError> {
        if !is_positive_integer(count) {
            return Err(ValidationError::RepCountNotPositiveInteger);
        }
        if count > f64::from(self.max_rep_count) {
            return Err(ValidationError::RepCountTooLarge { max: self.max_rep_count });
        }
        Ok(())
    }

    pub(crate) fn check_set_count(&self, count: f64) -> Result<(), ValidationError> {
        if !is_positive_integer(count) {
            return Err(ValidationError::SetCountNotPositiveInteger);
        }
        if count > f64::from(self.max_set_count) {
            return Err(ValidationError::SetCountTooLarge { max: self.max_set_count });
        }
        Ok(())
    }

    pub(crate) fn check_circle(&self, seconds: Option<f64>) -> Result<(), ValidationError> {
        let Some(seconds) = seconds else {
            return Ok(());
        };
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(ValidationError::CircleNotPositive);
        }
        if seconds > f64::from(self.max_circle_seconds) {
            return Err(ValidationError::CircleTooLong { max_seconds: self.max_circle_seconds });
        }
        Ok(())
    }
}

fn is_positive_integer(count: f64) -> bool {
    count.is_finite() && count.fract() == 0.0 && count >= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let rules = ValidationRules::from_yaml("{}").unwrap();
        assert_eq!(rules, ValidationRules::default());
    }

    #[test]
    fn overrides_individual_limits() {
        let yaml = "allowed_distances: [25, 50, 100]\nmax_circle_seconds: 300\n";
        let rules = ValidationRules::from_yaml(yaml).unwrap();
        assert_eq!(rules.allowed_distances, vec![25, 50, 100]);
        assert_eq!(rules.max_circle_seconds, 300);
        assert_eq!(rules.max_set_count, MAX_SET_COUNT);
    }

    #[test]
    fn inconsistent_rules_are_config_errors() {
        let err = ValidationRules::from_yaml("allowed_distances: []\n").unwrap_err();
        assert!(matches!(err, TimeError::Config { ref context, .. } if context == "allowed_distances"));

        let err = ValidationRules::from_yaml("allowed_distances: [0, 50]\n").unwrap_err();
        assert!(matches!(err, TimeError::Config { .. }));

        let err = ValidationRules::from_yaml("max_set_count: 0\n").unwrap_err();
        assert!(matches!(err, TimeError::Config { ref context, .. } if context == "max_set_count"));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = ValidationRules::from_yaml("max_rep_count: many\n").unwrap_err();
        assert!(matches!(err, TimeError::Config { .. }));
        assert!(!err.is_input_error());
    }

    #[test]
    fn custom_limits_apply() {
        let rules = ValidationRules { max_rep_count: 10, ..ValidationRules::default() };
        assert_eq!(rules.check_rep_count(10.0), Ok(()));
        assert_eq!(rules.check_rep_count(11.0), Err(ValidationError::RepCountTooLarge { max: 10 }));
    }
}
