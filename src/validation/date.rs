//! Calendar date rules
//!
//! Comparisons happen at local calendar-day granularity, so today is both a
//! valid past date and a valid future date.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::trace;

use super::{ValidationError, ValidationResult};

/// Parse a date as entered by the client into a local calendar day.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DDTHH:MM:SS[.f]` and RFC 3339
/// timestamps; timestamps with an offset are converted to the local day.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Local).date_naive());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(local.date());
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn check_date(input: &str) -> Result<NaiveDate, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::DateEmpty);
    }
    parse_calendar_date(input).ok_or_else(|| {
        trace!(input, "Unrecognised date");
        ValidationError::DateInvalid
    })
}

/// A non-empty, parseable date.
pub fn validate_date(input: &str) -> ValidationResult {
    check_date(input).map(|_| ()).into()
}

/// A date no later than today on the local clock.
pub fn validate_past_date(input: &str) -> ValidationResult {
    validate_past_date_on(input, Local::now().date_naive())
}

/// A date no later than `today`.
pub fn validate_past_date_on(input: &str, today: NaiveDate) -> ValidationResult {
    check_date(input)
        .and_then(|date| if date > today { Err(ValidationError::DateInFuture) } else { Ok(()) })
        .into()
}

/// A date no earlier than today on the local clock.
pub fn validate_future_date(input: &str) -> ValidationResult {
    validate_future_date_on(input, Local::now().date_naive())
}

/// A date no earlier than `today`.
pub fn validate_future_date_on(input: &str, today: NaiveDate) -> ValidationResult {
    check_date(input)
        .and_then(|date| if date < today { Err(ValidationError::DateInPast) } else { Ok(()) })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn accepted_shapes() {
        assert_eq!(parse_calendar_date("2025-01-15"), Some(day(2025, 1, 15)));
        assert_eq!(parse_calendar_date("2025/01/15"), Some(day(2025, 1, 15)));
        assert_eq!(parse_calendar_date("2025-01-15T09:30:00"), Some(day(2025, 1, 15)));
        assert_eq!(parse_calendar_date("2025-01-15T09:30:00.250"), Some(day(2025, 1, 15)));
        assert_eq!(parse_calendar_date(" 2025-01-15 "), Some(day(2025, 1, 15)));
    }

    #[test]
    fn rfc3339_converts_to_local_day() {
        let input = "2025-06-15T12:00:00Z";
        let expected = chrono::Utc
            .with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(parse_calendar_date(input), Some(expected));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(parse_calendar_date("2025-02-30"), None);
        assert_eq!(parse_calendar_date("2025-13-01"), None);
        assert_eq!(parse_calendar_date("invalid-date"), None);
        assert_eq!(parse_calendar_date("15/01/2025"), None);
    }

    #[test]
    fn validate_date_errors() {
        assert!(validate_date("2025-01-15").valid);
        assert_eq!(validate_date("").error, Some(ValidationError::DateEmpty));
        assert_eq!(validate_date("  ").error, Some(ValidationError::DateEmpty));
        assert_eq!(validate_date("invalid-date").error, Some(ValidationError::DateInvalid));
    }

    #[test]
    fn past_date_allows_today() {
        let today = day(2025, 3, 10);
        assert!(validate_past_date_on("2025-03-10", today).valid);
        assert!(validate_past_date_on("2025-03-09", today).valid);
        assert!(validate_past_date_on("2025-03-10T23:59:59", today).valid);
        assert_eq!(validate_past_date_on("2025-03-11", today).error, Some(ValidationError::DateInFuture));
        assert_eq!(validate_past_date_on("nope", today).error, Some(ValidationError::DateInvalid));
    }

    #[test]
    fn future_date_allows_today() {
        let today = day(2025, 3, 10);
        assert!(validate_future_date_on("2025-03-10", today).valid);
        assert!(validate_future_date_on("2025/03/11", today).valid);
        assert!(validate_future_date_on("2025-03-10T00:00:00", today).valid);
        assert_eq!(validate_future_date_on("2025-03-09", today).error, Some(ValidationError::DateInPast));
        assert_eq!(validate_future_date_on("", today).error, Some(ValidationError::DateEmpty));
    }

    #[test]
    fn local_clock_variants() {
        let today = Local::now().date_naive();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap().format("%Y-%m-%d").to_string();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap().format("%Y-%m-%d").to_string();

        assert!(validate_past_date(&yesterday).valid);
        assert!(!validate_past_date(&tomorrow).valid);
        assert!(validate_future_date(&tomorrow).valid);
        assert!(!validate_future_date(&yesterday).valid);
    }
}
