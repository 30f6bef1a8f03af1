//! Split and lap time records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cumulative elapsed time at a checkpoint of a single race performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct SplitTime {
    /// Distance from the start in meters
    pub distance: u32,
    /// Seconds elapsed since the start; `0` means "not recorded"
    pub split_time: f64,
}

impl SplitTime {
    /// Create a new split record.
    pub fn new(distance: u32, split_time: f64) -> Self {
        Self { distance, split_time }
    }

    /// Whether this split carries a usable time.
    pub fn is_recorded(&self) -> bool {
        self.split_time > 0.0
    }
}

/// Elapsed time for a single segment between two checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct LapTime {
    pub from_distance: u32,
    pub to_distance: u32,
    /// Segment time only, never cumulative
    pub lap_time: f64,
}

impl LapTime {
    /// Create a new lap record.
    pub fn new(from_distance: u32, to_distance: u32, lap_time: f64) -> Self {
        Self { from_distance, to_distance, lap_time }
    }
}

/// One row of a fixed-interval lap calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct IntervalLap {
    /// Checkpoint distance (a multiple of the interval)
    pub distance: u32,
    /// Lap time ending at `distance`, `None` when it cannot be computed
    pub lap_time: Option<f64>,
}

/// One row of the per-race lap table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct LapTableRow {
    pub distance: u32,
    pub split_time: f64,
    /// Lap time per interval, keyed by interval length in meters
    pub lap_times: BTreeMap<u32, Option<f64>>,
}

impl LapTableRow {
    /// Lap time for a given interval, flattening "not applicable" and "missing".
    pub fn lap_for(&self, interval: u32) -> Option<f64> {
        self.lap_times.get(&interval).copied().flatten()
    }
}
