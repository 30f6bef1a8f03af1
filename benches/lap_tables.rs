//! Benchmarks for lap calculation over realistic split sets
//!
//! The 1500 m fixture is the largest table a results page renders.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use swimtime::test_utils::{fifteen_hundred_free, hundred_free, two_hundred_im};
use swimtime::{
    SplitTime, calculate_all_lap_times, calculate_lap_times_for_interval, calculate_race_lap_times_table,
};

fn races() -> Vec<(&'static str, u32, Vec<SplitTime>)> {
    vec![
        ("100_free", 100, hundred_free()),
        ("200_im", 200, two_hundred_im()),
        ("1500_free", 1500, fifteen_hundred_free()),
    ]
}

fn bench_all_lap_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_lap_times");
    for (name, _, splits) in races() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &splits, |b, splits| {
            b.iter(|| black_box(calculate_all_lap_times(black_box(splits))))
        });
    }
    group.finish();
}

fn bench_interval_laps(c: &mut Criterion) {
    let splits = fifteen_hundred_free();
    let mut group = c.benchmark_group("interval_laps_1500");
    for interval in [50u32, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(interval), &interval, |b, &interval| {
            b.iter(|| black_box(calculate_lap_times_for_interval(black_box(&splits), interval)))
        });
    }
    group.finish();
}

fn bench_race_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("race_lap_table");
    for (name, race_distance, splits) in races() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &splits, |b, splits| {
            b.iter(|| black_box(calculate_race_lap_times_table(black_box(splits), race_distance)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_all_lap_times, bench_interval_laps, bench_race_table);
criterion_main!(benches);
