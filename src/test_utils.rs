//! Shared race fixtures for tests and benches
//!
//! Split sets modelled on real meet results, plus hand-entered time strings
//! in the shapes coaches actually type.

#![cfg(any(test, feature = "benchmark"))]

use crate::types::SplitTime;

/// Typed inputs covering every layout the lenient parser reads.
pub const SAMPLE_TIME_INPUTS: &[&str] = &[
    "1:23.45", "23.45", "30", "30s", "2:05.50", "31-2", "1-05-3", "1：05。30", "31ー2", "1:05-3", "", "abc",
    "-1:23.45", "1:2:3",
];

/// 100 m freestyle, 25 m splits.
pub fn hundred_free() -> Vec<SplitTime> {
    vec![
        SplitTime::new(25, 12.5),
        SplitTime::new(50, 26.0),
        SplitTime::new(75, 40.0),
        SplitTime::new(100, 55.0),
    ]
}

/// 200 m individual medley, 25 m splits, one per length.
pub fn two_hundred_im() -> Vec<SplitTime> {
    let laps = [13.1, 15.2, 16.0, 16.9, 18.4, 18.9, 16.3, 15.4];
    cumulative(25, &laps)
}

/// 1500 m freestyle with a steady 50 m pace and a faster final 100.
pub fn fifteen_hundred_free() -> Vec<SplitTime> {
    let mut laps = vec![31.8];
    laps.extend(std::iter::repeat_n(33.2, 27));
    laps.extend([32.1, 30.4]);
    cumulative(50, &laps)
}

/// Cumulative splits from per-segment laps of equal length.
pub fn cumulative(segment: u32, laps: &[f64]) -> Vec<SplitTime> {
    let mut elapsed = 0.0;
    laps.iter()
        .zip(1u32..)
        .map(|(lap, index)| {
            elapsed += lap;
            SplitTime::new(segment * index, elapsed)
        })
        .collect()
}

/// Install an env-filtered fmt subscriber once; later calls are no-ops.
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calc_sum, calculate_all_lap_times};

    #[test]
    fn fixtures_cover_their_race_distance() {
        assert_eq!(hundred_free().last().map(|split| split.distance), Some(100));
        assert_eq!(two_hundred_im().last().map(|split| split.distance), Some(200));
        assert_eq!(fifteen_hundred_free().len(), 30);
        assert_eq!(fifteen_hundred_free().last().map(|split| split.distance), Some(1500));
    }

    #[test]
    fn fixture_laps_sum_to_final_split() {
        init_test_tracing();
        for splits in [hundred_free(), two_hundred_im(), fifteen_hundred_free()] {
            let laps = calculate_all_lap_times(&splits);
            let total = calc_sum(laps.iter().map(|lap| lap.lap_time));
            let last = splits.last().unwrap().split_time;
            assert!((total - last).abs() < 1e-9);
        }
    }
}
