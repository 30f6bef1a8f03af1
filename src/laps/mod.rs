//! Lap times derived from cumulative split times.
//!
//! A split is the elapsed time at a checkpoint; a lap is the time between two
//! checkpoints. Splits may arrive in any order and a split time of `0` means
//! "not recorded", which breaks any lap that would start or end there.
//!
//! ```rust
//! use swimtime::{SplitTime, calculate_all_lap_times};
//!
//! let splits = [
//!     SplitTime::new(50, 26.0),
//!     SplitTime::new(25, 12.5),
//!     SplitTime::new(100, 55.0),
//!     SplitTime::new(75, 40.0),
//! ];
//! let laps: Vec<f64> = calculate_all_lap_times(&splits).iter().map(|lap| lap.lap_time).collect();
//! assert_eq!(laps, vec![12.5, 13.5, 14.0, 15.0]);
//! ```

mod table;

pub use table::{calculate_lap_times_for_interval, calculate_race_lap_times_table};

use tracing::debug;

use crate::types::{LapTime, SplitTime};

/// Lap intervals offered in race tables, shortest first.
pub const LAP_INTERVALS: [u32; 5] = [25, 50, 100, 200, 400];

/// Distance-race intervals stop at 100 m.
const DISTANCE_RACE: u32 = 1500;

/// Splits ordered by distance; equal distances keep their input order.
pub(crate) fn sorted_splits(splits: &[SplitTime]) -> Vec<SplitTime> {
    let mut sorted = splits.to_vec();
    sorted.sort_by_key(|split| split.distance);
    sorted
}

/// Lap between every pair of adjacent recorded splits, plus the opening lap
/// from the start.
pub fn calculate_all_lap_times(splits: &[SplitTime]) -> Vec<LapTime> {
    let sorted = sorted_splits(splits);
    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let mut laps = Vec::with_capacity(sorted.len());
    if first.distance > 0 && first.is_recorded() {
        laps.push(LapTime::new(0, first.distance, first.split_time));
    }

    let mut breaks = 0usize;
    for pair in sorted.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if prev.distance < curr.distance && prev.is_recorded() && curr.is_recorded() {
            laps.push(LapTime::new(prev.distance, curr.distance, curr.split_time - prev.split_time));
        } else {
            breaks += 1;
        }
    }

    if breaks > 0 {
        debug!(splits = sorted.len(), laps = laps.len(), breaks, "Lap chain has breaks");
    }
    laps
}

/// Intervals shorter than the race distance; 1500 m uses 25, 50 and 100.
///
/// ```rust
/// use swimtime::get_lap_intervals_for_race;
///
/// assert_eq!(get_lap_intervals_for_race(200), vec![25, 50, 100]);
/// assert_eq!(get_lap_intervals_for_race(25), Vec::<u32>::new());
/// ```
pub fn get_lap_intervals_for_race(race_distance: u32) -> Vec<u32> {
    if race_distance == DISTANCE_RACE {
        return vec![25, 50, 100];
    }
    LAP_INTERVALS.into_iter().filter(|interval| *interval < race_distance).collect()
}
