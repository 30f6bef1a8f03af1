//! Aggregates over timed entries
//!
//! Entries whose time is zero, negative or non-finite are "not recorded" and
//! are skipped by every aggregate.

use crate::types::TimeEntryLike;

fn recorded<I>(entries: I) -> impl Iterator<Item = f64>
where
    I: IntoIterator,
    I::Item: TimeEntryLike,
{
    entries
        .into_iter()
        .map(|entry| entry.time())
        .filter(|time| time.is_finite() && *time > 0.0)
}

/// Fastest recorded time, or `None` when nothing was recorded.
///
/// ```rust
/// use swimtime::calc_fastest;
///
/// assert_eq!(calc_fastest([31.2, 0.0, 30.8]), Some(30.8));
/// assert_eq!(calc_fastest([0.0, -1.0]), None);
/// ```
pub fn calc_fastest<I>(entries: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: TimeEntryLike,
{
    recorded(entries).reduce(f64::min)
}

/// Mean of recorded times, or `None` when nothing was recorded.
pub fn calc_average<I>(entries: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: TimeEntryLike,
{
    let (sum, count) = recorded(entries).fold((0.0, 0usize), |(sum, count), time| (sum + time, count + 1));
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Sum of recorded times; `0.0` when nothing was recorded.
pub fn calc_sum<I>(entries: I) -> f64
where
    I: IntoIterator,
    I::Item: TimeEntryLike,
{
    recorded(entries).fold(0.0, |sum, time| sum + time)
}

/// Seconds per 100 m.
pub fn calculate_pace(total_seconds: f64, distance: f64) -> f64 {
    if distance <= 0.0 || distance.is_nan() {
        return 0.0;
    }
    (total_seconds / distance) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeEntry;
    use proptest::prelude::*;

    #[test]
    fn aggregates_skip_unrecorded_entries() {
        let entries = [
            TimeEntry::new(31.2),
            TimeEntry::new(0.0),
            TimeEntry::new(30.8),
            TimeEntry::new(-5.0),
            TimeEntry::new(f64::NAN),
            TimeEntry::new(32.0),
        ];
        assert_eq!(calc_fastest(&entries), Some(30.8));
        assert_eq!(calc_sum(&entries), 31.2 + 30.8 + 32.0);
        let average = calc_average(&entries).unwrap();
        assert!((average - 31.333_333).abs() < 1e-6);
    }

    #[test]
    fn optional_times_count_as_missing() {
        let times = [Some(28.5), None, Some(29.5)];
        assert_eq!(calc_fastest(times), Some(28.5));
        assert_eq!(calc_average(times), Some(29.0));
        assert_eq!(calc_sum(times), 58.0);
    }

    #[test]
    fn empty_input() {
        let empty: [f64; 0] = [];
        assert_eq!(calc_fastest(empty), None);
        assert_eq!(calc_average(empty), None);
        assert_eq!(calc_sum(empty), 0.0);
    }

    #[test]
    fn infinite_times_are_skipped() {
        assert_eq!(calc_fastest([f64::INFINITY, 40.0]), Some(40.0));
        assert_eq!(calc_sum([f64::INFINITY]), 0.0);
    }

    #[test]
    fn pace_per_hundred_meters() {
        assert_eq!(calculate_pace(120.0, 200.0), 60.0);
        assert_eq!(calculate_pace(1000.0, 1500.0), (1000.0 / 1500.0) * 100.0);
        assert_eq!(calculate_pace(60.0, 0.0), 0.0);
        assert_eq!(calculate_pace(60.0, -50.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_all_invalid_entries_aggregate_to_nothing(
            times in prop::collection::vec(prop_oneof![Just(0.0), -1.0e6f64..=0.0, Just(f64::NAN)], 0..20)
        ) {
            prop_assert_eq!(calc_fastest(&times), None);
            prop_assert_eq!(calc_average(&times), None);
            prop_assert_eq!(calc_sum(&times), 0.0);
        }

        #[test]
        fn prop_fastest_bounds_average(times in prop::collection::vec(0.01f64..3600.0, 1..20)) {
            let fastest = calc_fastest(&times).unwrap();
            let average = calc_average(&times).unwrap();
            prop_assert!(fastest <= average + 1e-9);
            prop_assert!(calc_sum(&times) >= fastest);
        }
    }
}
