//! Race-time parsing, formatting, validation and lap analysis for swim teams.
//!
//! swimtime is the timing core behind a team's record book and practice log.
//! Everything works on plain `f64` seconds and is pure and synchronous.
//!
//! # Features
//!
//! - **Parsing**: a lenient parser for keystroke-by-keystroke form input
//!   (`1:23.45`, `31-2`, `1：05。30`) and a strict parser for canonical text
//! - **Quick entry**: carries the tens digit and minutes across consecutive
//!   entries so a column of times can be typed with a few keys each
//! - **Formatting**: one- and two-decimal display families that round before
//!   splitting minutes and seconds
//! - **Validation**: domain rules with user-facing messages, configurable
//!   through [`ValidationRules`]
//! - **Laps**: incremental laps from cumulative splits, fixed-interval laps
//!   and per-race lap tables
//!
//! # Quick Start
//!
//! ```rust
//! use swimtime::{SplitTime, calculate_race_lap_times_table, format_time, parse_time};
//!
//! let splits: Vec<SplitTime> = [(25, "13.0"), (50, "27.0"), (75, "42.0"), (100, "57.0")]
//!     .into_iter()
//!     .map(|(distance, text)| SplitTime::new(distance, parse_time(text)))
//!     .collect();
//!
//! let table = calculate_race_lap_times_table(&splits, 100);
//! let last = table.last().unwrap();
//! assert_eq!(format_time(last.split_time), "57.0");
//! assert_eq!(last.lap_for(50), Some(30.0));
//! ```
//!
//! # Cargo features
//!
//! - `tauri`: derive `specta::Type` on the data types for TypeScript export
//! - `benchmark`: expose [`test_utils`] fixtures to the criterion benches

// Core types and error handling
mod error;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Domain modules
pub mod laps;
pub mod time;
pub mod validation;

// Core exports
pub use error::*;
pub use types::*;

pub use laps::{
    calculate_all_lap_times, calculate_lap_times_for_interval, calculate_race_lap_times_table,
    get_lap_intervals_for_race,
};
pub use time::*;
pub use validation::{ValidationError, ValidationResult, ValidationRules};
