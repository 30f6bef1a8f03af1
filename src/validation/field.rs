//! Practice fields, free text and event identifiers

use unicode_segmentation::UnicodeSegmentation;

use super::{ValidationError, ValidationResult, ValidationRules};
use crate::types::{PoolType, Stroke};

/// One of the standard race distances.
pub fn validate_distance(distance: u32) -> ValidationResult {
    ValidationRules::standard().check_distance(distance).into()
}

/// Whole number of reps between 1 and 100.
pub fn validate_rep_count(count: f64) -> ValidationResult {
    ValidationRules::standard().check_rep_count(count).into()
}

/// Whole number of sets between 1 and 50.
pub fn validate_set_count(count: f64) -> ValidationResult {
    ValidationRules::standard().check_set_count(count).into()
}

/// Optional send-off interval; when present, positive and at most ten
/// minutes.
pub fn validate_circle(seconds: Option<f64>) -> ValidationResult {
    ValidationRules::standard().check_circle(seconds).into()
}

impl ValidationRules {
    pub fn validate_distance(&self, distance: u32) -> ValidationResult {
        self.check_distance(distance).into()
    }

    pub fn validate_rep_count(&self, count: f64) -> ValidationResult {
        self.check_rep_count(count).into()
    }

    pub fn validate_set_count(&self, count: f64) -> ValidationResult {
        self.check_set_count(count).into()
    }

    pub fn validate_circle(&self, seconds: Option<f64>) -> ValidationResult {
        self.check_circle(seconds).into()
    }
}

/// Non-empty after trimming; `field` names the input in the message.
pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::failure(ValidationError::Required { field: field.to_string() });
    }
    ValidationResult::success()
}

/// At most `max` user-perceived characters.
pub fn validate_max_length(value: &str, max: usize, field: &str) -> ValidationResult {
    if value.graphemes(true).count() > max {
        return ValidationResult::failure(ValidationError::TooLong { field: field.to_string(), max });
    }
    ValidationResult::success()
}

/// `short` or `long`, case-sensitive.
pub fn validate_pool_type(value: &str) -> ValidationResult {
    match value.parse::<PoolType>() {
        Ok(_) => ValidationResult::success(),
        Err(_) => ValidationResult::failure(ValidationError::PoolTypeInvalid),
    }
}

/// One of the five stroke identifiers, case-sensitive.
pub fn validate_stroke(value: &str) -> ValidationResult {
    match value.parse::<Stroke>() {
        Ok(_) => ValidationResult::success(),
        Err(_) => ValidationResult::failure(ValidationError::StrokeInvalid),
    }
}
