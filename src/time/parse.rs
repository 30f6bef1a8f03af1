//! Lenient and strict race-time parsing
//!
//! Two contracts share one tokenizer:
//!
//! - [`parse_time`] is for keystroke-by-keystroke form input. It accepts the
//!   clock layout (`1:23.45`), a trailing `s` suffix, and the quick layout
//!   with arbitrary separators (`31-2`, `1-05-3`, `1：05。30`). Anything it
//!   cannot read becomes `0.0`.
//! - [`parse_time_strict`] / [`parse_time_checked`] accept only canonical
//!   `M:SS.ms` or `SS.ms` and report failures instead of defaulting.

use tracing::trace;

use super::tokenizer::{Layout, TokenStream, exact_decimal, leading_decimal, leading_integer};
use crate::{Result, TimeError};

/// Parse a hand-entered time into seconds, returning `0.0` for anything
/// unreadable, empty or negative.
///
/// ```rust
/// use swimtime::parse_time;
///
/// assert_eq!(parse_time("1:23.45"), 83.45);
/// assert_eq!(parse_time("31-2"), 31.2);
/// assert_eq!(parse_time("1-05-3"), 65.3);
/// assert_eq!(parse_time("30s"), 30.0);
/// assert_eq!(parse_time("1:2:3"), 0.0);
/// ```
pub fn parse_time(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let cleaned = trimmed.strip_suffix(['s', 'S']).unwrap_or(trimmed);
    if cleaned.starts_with('-') {
        trace!(input = trimmed, "Rejected negative time input");
        return 0.0;
    }

    let stream = TokenStream::new(cleaned);
    let seconds = match stream.layout() {
        Layout::Clock => clock_seconds(cleaned),
        Layout::Quick => quick_seconds(&stream.segments()),
    };

    match seconds {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            trace!(
                input = trimmed,
                layout = ?stream.layout(),
                separators = ?stream.separator_classes(),
                "Unreadable time input"
            );
            0.0
        }
    }
}

/// `M:SS.ms`, `M:SS`, `SS.ms` or plain seconds.
fn clock_seconds(cleaned: &str) -> Option<f64> {
    match cleaned.matches(':').count() {
        0 => leading_decimal(cleaned),
        1 => {
            let (minutes, seconds) = cleaned.split_once(':')?;
            let minutes = leading_integer(minutes)?;
            let seconds = leading_decimal(seconds)?;
            Some(minutes * 60.0 + seconds)
        }
        _ => None,
    }
}

/// Positional digit segments: `SS`, `SS-f` or `M-SS-f`.
fn quick_seconds(segments: &[&str]) -> Option<f64> {
    match segments {
        [seconds] => digits(seconds),
        [seconds, fraction] => Some(digits(seconds)? + hundredths(fraction)?),
        [minutes, seconds, fraction] => {
            Some(digits(minutes)? * 60.0 + digits(seconds)? + hundredths(fraction)?)
        }
        _ => None,
    }
}

fn digits(segment: &str) -> Option<f64> {
    segment.parse::<f64>().ok()
}

/// A single fractional digit means tenths (`3` → `.30`); longer runs are
/// read as hundredths.
pub(crate) fn hundredths(segment: &str) -> Option<f64> {
    let value = digits(segment)?;
    let value = if segment.len() == 1 { value * 10.0 } else { value };
    Some(value / 100.0)
}

/// Parse a canonical `M:SS.ms` or `SS.ms` time, returning `None` on any
/// failure.
///
/// ```rust
/// use swimtime::parse_time_strict;
///
/// assert_eq!(parse_time_strict("1:23.45"), Some(83.45));
/// assert_eq!(parse_time_strict("1:2:3"), None);
/// assert_eq!(parse_time_strict("31-2"), None);
/// ```
pub fn parse_time_strict(input: &str) -> Option<f64> {
    parse_time_checked(input).ok()
}

/// Parse a canonical `M:SS.ms` or `SS.ms` time, reporting why it was
/// rejected.
pub fn parse_time_checked(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeError::Empty);
    }

    if trimmed.matches(':').count() > 1 {
        return Err(TimeError::MultipleColons { input: trimmed.to_string() });
    }

    let seconds = match trimmed.split_once(':') {
        Some((minutes, seconds)) => {
            let (minutes, seconds) = (minutes.trim(), seconds.trim());
            reject_negative(trimmed, minutes)?;
            reject_negative(trimmed, seconds)?;

            let minutes = exact_integer(minutes)
                .ok_or_else(|| TimeError::malformed(trimmed, "minutes must be a whole number"))?;
            let seconds = exact_decimal(seconds)
                .ok_or_else(|| TimeError::malformed(trimmed, "seconds must be a decimal number"))?;
            if !minutes.is_finite() || !seconds.is_finite() {
                return Err(TimeError::NonFinite { input: trimmed.to_string() });
            }
            minutes * 60.0 + seconds
        }
        None => {
            reject_negative(trimmed, trimmed)?;
            exact_decimal(trimmed)
                .ok_or_else(|| TimeError::malformed(trimmed, "expected M:SS.ms or SS.ms"))?
        }
    };

    if !seconds.is_finite() {
        return Err(TimeError::NonFinite { input: trimmed.to_string() });
    }
    Ok(seconds)
}

fn reject_negative(input: &str, component: &str) -> Result<()> {
    if component.starts_with('-') {
        return Err(TimeError::Negative { input: input.to_string() });
    }
    Ok(())
}

fn exact_integer(input: &str) -> Option<f64> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse::<f64>().ok()
}
