//! Context-carrying quick entry for rapid keyboard input
//!
//! When a coach types a column of similar times, only the digits that change
//! are entered. The tens digit of the seconds and the minutes of the previous
//! entry carry forward through [`QuickTimeContext`]:
//!
//! ```rust
//! use swimtime::parse_quick_time;
//!
//! let first = parse_quick_time("31-2", None).unwrap();
//! assert_eq!(first.time, 31.2);
//!
//! let second = parse_quick_time("2-3", Some(&first.context)).unwrap();
//! assert_eq!(second.time, 32.3);
//! assert_eq!(second.display_value, "32.3");
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::format::format_time;
use super::parse::hundredths;
use super::tokenizer::TokenStream;

/// State carried from one quick entry to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct QuickTimeContext {
    /// Minutes of the previous entry, `0` under a minute
    pub minutes: u32,
    /// Tens digit of the previous entry's seconds
    pub tens_digit: u8,
}

/// Parsed quick entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct QuickTimeResult {
    /// Total seconds
    pub time: f64,
    /// Context to pass to the next entry
    pub context: QuickTimeContext,
    /// One-decimal display string
    pub display_value: String,
}

impl QuickTimeResult {
    fn new(minutes: u32, seconds: u32, fraction: f64) -> Self {
        let time = minutes as f64 * 60.0 + seconds as f64 + fraction;
        Self {
            time,
            context: QuickTimeContext { minutes, tens_digit: tens_digit(seconds) },
            display_value: format_time(time),
        }
    }
}

fn tens_digit(seconds: u32) -> u8 {
    ((seconds / 10) % 10) as u8
}

/// Parse a quick entry (`SS-f`, `S-f` or `M-SS-f`, any non-digit separator).
///
/// Returns `None` unless the input has two or three digit segments that fit
/// in a `u32`.
pub fn parse_quick_time(input: &str, previous: Option<&QuickTimeContext>) -> Option<QuickTimeResult> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stream = TokenStream::new(trimmed);
    let context = previous.copied().unwrap_or_default();

    let result = match stream.segments().as_slice() {
        [seconds, fraction] => two_part(seconds, fraction, context),
        [minutes, seconds, fraction] => three_part(minutes, seconds, fraction),
        _ => None,
    };

    if result.is_none() {
        trace!(input = trimmed, segments = stream.segment_count(), "Not a quick time entry");
    }
    result
}

fn two_part(seconds_part: &str, fraction_part: &str, context: QuickTimeContext) -> Option<QuickTimeResult> {
    let fraction = hundredths(fraction_part)?;
    let entered: u32 = seconds_part.parse().ok()?;

    if seconds_part.len() == 1 {
        let seconds = u32::from(context.tens_digit) * 10 + entered;
        let mut result = QuickTimeResult::new(context.minutes, seconds, fraction);
        result.context.tens_digit = context.tens_digit;
        return Some(result);
    }

    let (minutes, seconds) = if entered >= 60 {
        (entered / 60, entered % 60)
    } else {
        (context.minutes, entered)
    };
    Some(QuickTimeResult::new(minutes, seconds, fraction))
}

fn three_part(minutes_part: &str, seconds_part: &str, fraction_part: &str) -> Option<QuickTimeResult> {
    let minutes: u32 = minutes_part.parse().ok()?;
    let seconds: u32 = seconds_part.parse().ok()?;
    let fraction = hundredths(fraction_part)?;
    Some(QuickTimeResult::new(minutes, seconds, fraction))
}

/// Whether the input has the two or three digit segments of a quick entry.
pub fn is_quick_time_format(input: &str) -> bool {
    matches!(TokenStream::new(input.trim()).segment_count(), 2 | 3)
}
