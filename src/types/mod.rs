//! Core types shared by the time, validation and lap modules.
//!
//! ## Overview
//!
//! - [`SplitTime`] is a cumulative checkpoint time; [`LapTime`], [`IntervalLap`]
//!   and [`LapTableRow`] are derived from sets of splits
//! - [`TimeEntryLike`] abstracts over anything that carries a time in seconds
//! - [`PoolType`] and [`Stroke`] are the closed event enumerations
//! - [`Precision`] selects the one- or two-decimal formatter family
//!
//! All types serialize with the camelCase field names used by the client:
//!
//! ```rust
//! use swimtime::types::SplitTime;
//!
//! let split: SplitTime = serde_json::from_str(r#"{"distance":50,"splitTime":30.5}"#).unwrap();
//! assert_eq!(split, SplitTime::new(50, 30.5));
//! ```

mod entry;
mod event;
mod precision;
mod split;

pub use entry::{TimeEntry, TimeEntryLike};
pub use event::{PoolType, STANDARD_DISTANCES, Stroke, UnknownIdentifier};
pub use precision::Precision;
pub use split::{IntervalLap, LapTableRow, LapTime, SplitTime};
