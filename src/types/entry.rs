//! Timed entries consumed by the aggregate statistics

use serde::{Deserialize, Serialize};

/// Anything that exposes a race or practice time in seconds.
///
/// Non-positive and non-finite times are treated as "no time" by the
/// aggregation functions in [`crate::time`].
pub trait TimeEntryLike {
    fn time(&self) -> f64;
}

/// Minimal timed entry as exchanged with the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct TimeEntry {
    /// Seconds; `0` when nothing was entered
    #[serde(default)]
    pub time: f64,
}

impl TimeEntry {
    pub fn new(time: f64) -> Self {
        Self { time }
    }
}

impl TimeEntryLike for TimeEntry {
    fn time(&self) -> f64 {
        self.time
    }
}

impl TimeEntryLike for f64 {
    fn time(&self) -> f64 {
        *self
    }
}

impl TimeEntryLike for Option<f64> {
    fn time(&self) -> f64 {
        self.unwrap_or(0.0)
    }
}

impl<T: TimeEntryLike + ?Sized> TimeEntryLike for &T {
    fn time(&self) -> f64 {
        (**self).time()
    }
}
