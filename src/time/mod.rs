//! Race-time parsing, formatting and aggregation.
//!
//! Times are plain `f64` seconds everywhere. Input goes through one
//! tokenizer shared by the lenient form parser ([`parse_time`]), the strict
//! canonical parser ([`parse_time_checked`]) and the quick entry parser
//! ([`parse_quick_time`]).
//!
//! ```rust
//! use swimtime::{format_time, format_time_hundredths, parse_time};
//!
//! let seconds = parse_time("1:05.42");
//! assert_eq!(format_time(seconds), "1:05.4");
//! assert_eq!(format_time_hundredths(seconds), "1:05.42");
//! ```

mod format;
mod parse;
mod quick;
mod stats;
mod tokenizer;

pub use format::{
    MinutesStyle, format_seconds, format_time, format_time_average, format_time_best, format_time_diff,
    format_time_full, format_time_hundredths, format_time_short, format_time_short_hundredths,
};
pub use parse::{parse_time, parse_time_checked, parse_time_strict};
pub use quick::{QuickTimeContext, QuickTimeResult, is_quick_time_format, parse_quick_time};
pub use stats::{calc_average, calc_fastest, calc_sum, calculate_pace};
