//! Fixed-interval laps and the per-race lap table

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{get_lap_intervals_for_race, sorted_splits};
use crate::types::{IntervalLap, LapTableRow, SplitTime};

/// Rows of the race table are restricted to multiples of the pool segment.
const TABLE_STEP: u32 = 25;

fn find(sorted: &[SplitTime], distance: u32) -> Option<&SplitTime> {
    sorted.iter().find(|split| split.distance == distance)
}

/// Lap ending at `target` measured over `interval` meters, looking the
/// anchor split up in `sorted`.
fn lap_over(sorted: &[SplitTime], target: &SplitTime, interval: u32) -> Option<f64> {
    let anchor_distance = target.distance.checked_sub(interval)?;
    match find(sorted, anchor_distance) {
        Some(anchor) if anchor.is_recorded() => Some(target.split_time - anchor.split_time),
        _ if anchor_distance == 0 => Some(target.split_time),
        _ => None,
    }
}

/// Lap time at every multiple of `interval` up to the longest split.
///
/// Checkpoints without a recorded split, or whose anchor one interval back is
/// unrecorded, yield `None`. The start (0 m) is an implicit zero anchor.
///
/// ```rust
/// use swimtime::{SplitTime, calculate_lap_times_for_interval};
///
/// let splits = [SplitTime::new(50, 30.0), SplitTime::new(100, 62.5)];
/// let laps = calculate_lap_times_for_interval(&splits, 50);
/// assert_eq!(laps[0].lap_time, Some(30.0));
/// assert_eq!(laps[1].lap_time, Some(32.5));
/// ```
pub fn calculate_lap_times_for_interval(splits: &[SplitTime], interval: u32) -> Vec<IntervalLap> {
    if interval == 0 {
        return Vec::new();
    }
    let sorted = sorted_splits(splits);
    let Some(longest) = sorted.last().map(|split| split.distance) else {
        return Vec::new();
    };

    let laps: Vec<IntervalLap> = (interval..=longest)
        .step_by(interval as usize)
        .map(|distance| {
            let lap_time = find(&sorted, distance)
                .filter(|target| target.is_recorded())
                .and_then(|target| lap_over(&sorted, target, interval));
            if lap_time.is_none() {
                trace!(distance, interval, "No lap time at checkpoint");
            }
            IntervalLap { distance, lap_time }
        })
        .collect();

    debug!(
        interval,
        checkpoints = laps.len(),
        gaps = laps.iter().filter(|lap| lap.lap_time.is_none()).count(),
        "Calculated interval laps"
    );
    laps
}

/// One row per recorded split on a 25 m boundary, with the lap time for each
/// interval of the race that divides the row's distance.
pub fn calculate_race_lap_times_table(splits: &[SplitTime], race_distance: u32) -> Vec<LapTableRow> {
    let intervals = get_lap_intervals_for_race(race_distance);
    let rows: Vec<SplitTime> = sorted_splits(splits)
        .into_iter()
        .filter(|split| split.distance % TABLE_STEP == 0 && split.is_recorded())
        .collect();

    let table: Vec<LapTableRow> = rows
        .iter()
        .map(|row| {
            let lap_times: BTreeMap<u32, Option<f64>> = intervals
                .iter()
                .map(|&interval| {
                    let lap = match row.distance % interval {
                        0 if row.distance == interval => Some(row.split_time),
                        0 => lap_over(&rows, row, interval),
                        _ => None,
                    };
                    (interval, lap)
                })
                .collect();
            LapTableRow { distance: row.distance, split_time: row.split_time, lap_times }
        })
        .collect();

    debug!(race_distance, rows = table.len(), intervals = intervals.len(), "Built race lap table");
    table
}
