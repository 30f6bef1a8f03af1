//! Range and shape rules for race times

use super::{ValidationError, ValidationResult};

/// Longest time accepted by [`validate_time`], one day.
pub const MAX_TIME_SECONDS: f64 = 86_400.0;
/// Longest time accepted by [`validate_swim_time`], one hour.
pub const MAX_SWIM_TIME_SECONDS: f64 = 3_600.0;

fn check_range(seconds: f64, max: f64, too_long: ValidationError) -> Result<(), ValidationError> {
    if !seconds.is_finite() {
        return Err(ValidationError::TimeInvalid);
    }
    if seconds <= 0.0 {
        return Err(ValidationError::TimeNotPositive);
    }
    if seconds > max {
        return Err(too_long);
    }
    Ok(())
}

/// Any positive duration up to one day.
pub fn validate_time(seconds: f64) -> ValidationResult {
    check_range(seconds, MAX_TIME_SECONDS, ValidationError::TimeExceedsDay).into()
}

/// A race time: positive and at most one hour.
pub fn validate_swim_time(seconds: f64) -> ValidationResult {
    check_range(seconds, MAX_SWIM_TIME_SECONDS, ValidationError::SwimTimeTooLong).into()
}

/// Shape check for `M:SS.ms` (`1:23.45`) or `SS.ms` (`23.45`) text, one or
/// two digits after the point. No range rules.
pub fn validate_time_string(input: &str) -> ValidationResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationResult::failure(ValidationError::TimeStringEmpty);
    }

    let well_formed = match trimmed.split_once(':') {
        Some((minutes, rest)) => match rest.split_once('.') {
            Some((seconds, fraction)) => {
                digit_run(minutes, 1..=usize::MAX) && digit_run(seconds, 1..=2) && digit_run(fraction, 1..=2)
            }
            None => false,
        },
        None => match trimmed.split_once('.') {
            Some((seconds, fraction)) => digit_run(seconds, 1..=usize::MAX) && digit_run(fraction, 1..=2),
            None => false,
        },
    };

    if well_formed {
        ValidationResult::success()
    } else {
        ValidationResult::failure(ValidationError::TimeStringMalformed)
    }
}

fn digit_run(part: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
