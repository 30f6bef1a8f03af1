//! Display formatting for race times
//!
//! Every formatter rounds to its display precision *before* splitting into
//! minutes and seconds, so a value that rounds up into the next minute rolls
//! over (`59.99` → `1:00.0`). Negative, NaN and infinite input is rendered as
//! the zero case of each formatter; nothing here fails.
//!
//! | function                        | zero / invalid | 30.5     | 65.42     |
//! |---------------------------------|----------------|----------|-----------|
//! | [`format_time`]                 | `0.0`          | `30.5`   | `1:05.4`  |
//! | [`format_time_short`]           | empty          | `30.5`   | `1:05.4`  |
//! | [`format_time_full`]            | `0:00.0`       | `0:30.5` | `1:05.4`  |
//! | [`format_time_hundredths`]      | `0:00.00`      | `0:30.50`| `1:05.42` |
//! | [`format_time_short_hundredths`]| empty          | `30.50`  | `1:05.42` |
//! | [`format_time_best`]            | `0.00`         | `30.50`  | `1:05.42` |
//! | [`format_time_average`]         | `0.00`         | `30.50`  | `1:05.42` |

use crate::types::Precision;

/// Whether the minutes component is rendered for times under a minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinutesStyle {
    /// `0:30.5`
    Always,
    /// `30.5`, switching to `M:SS.d` from one minute up
    WhenNeeded,
}

/// Largest count of display units a formatter renders exactly.
const MAX_UNITS: f64 = u128::MAX as f64;

/// `value` scaled to whole display units. Finite values are exact up to
/// `u128::MAX` units and clamp there; anything beyond is not a race time.
fn display_units(value: f64, units_per_one: u64) -> u128 {
    let scaled = (value * units_per_one as f64).round();
    if scaled >= MAX_UNITS { u128::MAX } else { scaled as u128 }
}

/// Format seconds at the given precision and minutes style.
///
/// Negative and non-finite input renders as zero. Values of more than
/// `u128::MAX` display units (3.4e36 seconds at hundredths) clamp to that
/// count.
pub fn format_seconds(seconds: f64, precision: Precision, style: MinutesStyle) -> String {
    let per_second = u128::from(precision.units_per_second());
    let units = if seconds.is_finite() && seconds > 0.0 {
        display_units(seconds, precision.units_per_second())
    } else {
        0
    };

    let per_minute = per_second * 60;
    let minutes = units / per_minute;
    let remainder = units % per_minute;
    let whole = remainder / per_second;
    let fraction = remainder % per_second;
    let width = precision.decimals();

    match style {
        MinutesStyle::WhenNeeded if minutes == 0 => {
            format!("{}.{:0width$}", whole, fraction, width = width)
        }
        _ => format!("{}:{:02}.{:0width$}", minutes, whole, fraction, width = width),
    }
}

fn is_blank(seconds: f64) -> bool {
    !seconds.is_finite() || seconds <= 0.0
}

/// `SS.d` under a minute, `M:SS.d` otherwise, `0.0` for zero or invalid.
pub fn format_time(seconds: f64) -> String {
    format_seconds(seconds, Precision::Tenths, MinutesStyle::WhenNeeded)
}

/// Like [`format_time`] but empty for zero or invalid input.
pub fn format_time_short(seconds: f64) -> String {
    if is_blank(seconds) {
        return String::new();
    }
    format_time(seconds)
}

/// Always `M:SS.d`, `0:00.0` for zero or invalid.
pub fn format_time_full(seconds: f64) -> String {
    format_seconds(seconds, Precision::Tenths, MinutesStyle::Always)
}

/// Always `M:SS.hh`, `0:00.00` for zero or invalid. Used by the time entry
/// widget.
pub fn format_time_hundredths(seconds: f64) -> String {
    format_seconds(seconds, Precision::Hundredths, MinutesStyle::Always)
}

/// `SS.hh` under a minute, `M:SS.hh` otherwise, empty for zero or invalid.
pub fn format_time_short_hundredths(seconds: f64) -> String {
    if is_blank(seconds) {
        return String::new();
    }
    format_seconds(seconds, Precision::Hundredths, MinutesStyle::WhenNeeded)
}

/// Best-time and record tables: `SS.hh` / `M:SS.hh`, `0.00` for zero or
/// invalid.
pub fn format_time_best(seconds: f64) -> String {
    format_seconds(seconds, Precision::Hundredths, MinutesStyle::WhenNeeded)
}

/// Same contract as [`format_time_best`]; used for average columns.
pub fn format_time_average(seconds: f64) -> String {
    format_time_best(seconds)
}

/// Signed difference `a - b` with two decimals (`+1.42`, `-0.68`).
///
/// Ties, differences that round to zero and non-finite differences render
/// as `+0.00`. Magnitudes clamp like [`format_seconds`].
pub fn format_time_diff(a: f64, b: f64) -> String {
    let diff = a - b;
    if !diff.is_finite() {
        return "+0.00".to_string();
    }

    let cents = display_units(diff.abs(), 100);
    let sign = if diff < 0.0 && cents > 0 { '-' } else { '+' };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_time_tenths() {
        assert_eq!(format_time(0.0), "0.0");
        assert_eq!(format_time(30.5), "30.5");
        assert_eq!(format_time(59.94), "59.9");
        assert_eq!(format_time(60.0), "1:00.0");
        assert_eq!(format_time(65.42), "1:05.4");
        assert_eq!(format_time(125.5), "2:05.5");
        assert_eq!(format_time(600.0), "10:00.0");
    }

    #[test]
    fn format_time_rolls_over_into_next_minute() {
        assert_eq!(format_time(59.99), "1:00.0");
        assert_eq!(format_time(3599.99), "60:00.0");
        assert_eq!(format_time_short(59.99), "1:00.0");
        assert_eq!(format_time_full(59.99), "1:00.0");
    }

    #[test]
    fn format_time_invalid_is_zero() {
        for value in [-1.0, -100.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(format_time(value), "0.0");
            assert_eq!(format_time_short(value), "");
            assert_eq!(format_time_full(value), "0:00.0");
            assert_eq!(format_time_hundredths(value), "0:00.00");
            assert_eq!(format_time_short_hundredths(value), "");
            assert_eq!(format_time_best(value), "0.00");
        }
    }

    #[test]
    fn format_time_short_and_full() {
        assert_eq!(format_time_short(0.0), "");
        assert_eq!(format_time_short(30.5), "30.5");
        assert_eq!(format_time_short(65.42), "1:05.4");
        assert_eq!(format_time_full(0.0), "0:00.0");
        assert_eq!(format_time_full(30.5), "0:30.5");
        assert_eq!(format_time_full(65.42), "1:05.4");
    }

    #[test]
    fn hundredths_family() {
        assert_eq!(format_time_hundredths(0.0), "0:00.00");
        assert_eq!(format_time_hundredths(23.45), "0:23.45");
        assert_eq!(format_time_hundredths(59.99), "0:59.99");
        assert_eq!(format_time_hundredths(83.45), "1:23.45");
        assert_eq!(format_time_hundredths(125.5), "2:05.50");
        assert_eq!(format_time_hundredths(61.01), "1:01.01");
        assert_eq!(format_time_hundredths(0.01), "0:00.01");
        assert_eq!(format_time_hundredths(3599.99), "59:59.99");
        assert_eq!(format_time_hundredths(3600.0), "60:00.00");

        assert_eq!(format_time_short_hundredths(0.0), "");
        assert_eq!(format_time_short_hundredths(0.01), "0.01");
        assert_eq!(format_time_short_hundredths(59.99), "59.99");
        assert_eq!(format_time_short_hundredths(60.0), "1:00.00");
        assert_eq!(format_time_short_hundredths(600.0), "10:00.00");

        assert_eq!(format_time_best(0.0), "0.00");
        assert_eq!(format_time_best(45.67), "45.67");
        assert_eq!(format_time_best(65.42), "1:05.42");
        assert_eq!(format_time_best(59.999), "1:00.00");
    }

    #[test]
    fn time_diff_sign_and_rounding() {
        assert_eq!(format_time_diff(65.42, 64.00), "+1.42");
        assert_eq!(format_time_diff(64.00, 65.42), "-1.42");
        assert_eq!(format_time_diff(60.00, 60.00), "+0.00");
        assert_eq!(format_time_diff(60.456, 60.00), "+0.46");
        assert_eq!(format_time_diff(60.454, 60.00), "+0.45");
        assert_eq!(format_time_diff(55.42, 54.74), "+0.68");
        assert_eq!(format_time_diff(54.74, 55.42), "-0.68");
        assert_eq!(format_time_diff(60.0, 60.001), "+0.00");
        assert_eq!(format_time_diff(f64::INFINITY, 1.0), "+0.00");
    }

    #[test]
    fn average_matches_best() {
        assert_eq!(format_time_average(65.42), "1:05.42");
        assert_eq!(format_time_average(45.67), "45.67");
        assert_eq!(format_time_average(0.0), "0.00");
        assert_eq!(format_time_average(-1.0), "0.00");
        assert_eq!(format_time_average(f64::NAN), "0.00");
    }

    #[test]
    fn huge_values_keep_exact_digits() {
        assert_eq!(format_time(1e20), "1666666666666666666:40.0");
        assert_eq!(format_time_hundredths(1e20), "1666666666666666666:40.00");
        assert_eq!(format_time_diff(1e18, 0.0), "+1000000000000000000.00");
        assert_eq!(format_time_diff(0.0, 1e18), "-1000000000000000000.00");
    }

    #[test]
    fn values_past_unit_range_clamp() {
        let clamped = u128::MAX;
        let expected = format!("{}:{:02}.{}", clamped / 600, clamped % 600 / 10, clamped % 10);
        assert_eq!(format_time(f64::MAX), expected);
        assert_eq!(format_time_diff(f64::MAX, 0.0), format!("+{}.{:02}", clamped / 100, clamped % 100));
    }

    proptest! {
        #[test]
        fn prop_diff_of_equal_values_is_positive_zero(x in -1.0e6f64..1.0e6) {
            prop_assert_eq!(format_time_diff(x, x), "+0.00");
        }

        #[test]
        fn prop_full_always_has_minutes(seconds in 0.0f64..10_000.0) {
            let full = format_time_full(seconds);
            prop_assert!(full.contains(':'));
            let (_, secs) = full.split_once(':').unwrap();
            prop_assert_eq!(secs.len(), 4);
        }

        #[test]
        fn prop_whole_minutes_render_exactly(minutes in 0u64..1_000_000_000_000) {
            let rendered = format_time_full(minutes as f64 * 60.0);
            prop_assert_eq!(rendered, format!("{}:00.0", minutes));
        }

        #[test]
        fn prop_seconds_component_below_sixty(seconds in 0.0f64..100_000.0) {
            let rendered = format_time_hundredths(seconds);
            let (_, secs) = rendered.split_once(':').unwrap();
            let value: f64 = secs.parse().unwrap();
            prop_assert!(value < 60.0);
        }
    }
}
