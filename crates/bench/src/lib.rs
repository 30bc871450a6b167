use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Uniform integer in `[min(start, end), max(start, end)]`, both ends included.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, start: usize, end: usize) -> usize {
    rng.random_range(start.min(end)..=start.max(end))
}

/// `len` pairwise-distinct values drawn from `range`, in draw order.
pub fn distinct_values<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<u64>,
) -> Vec<u64> {
    let span = range.end().saturating_sub(*range.start()).saturating_add(1);
    assert!(
        range.start() <= range.end() && len as u64 <= span,
        "cannot draw {len} distinct values from {range:?}",
    );

    let mut seen = HashSet::with_capacity(len);
    let mut values = Vec::with_capacity(len);
    while values.len() < len {
        let value = rng.random_range(range.clone());
        if seen.insert(value) {
            values.push(value);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_stays_in_bounds() {
        let mut rng = default_rng();
        for _ in 0..100 {
            let start = rng.random_range(0..1000);
            let end = rng.random_range(0..1000);
            let value = random_int(&mut rng, start, end);
            assert!(value >= start.min(end), "start={start} end={end} value={value}");
            assert!(value <= start.max(end), "start={start} end={end} value={value}");
        }
    }

    #[test]
    fn random_int_reaches_both_ends() {
        let mut rng = default_rng();
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[random_int(&mut rng, 3, 0)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn random_int_equal_ends() {
        let mut rng = default_rng();
        assert_eq!(random_int(&mut rng, 7, 7), 7);
    }

    #[test]
    fn distinct_values_are_distinct_and_in_range() {
        let mut rng = default_rng();
        let values = distinct_values(&mut rng, 64, 1..=100);
        assert_eq!(values.len(), 64);
        assert!(values.iter().all(|v| (1..=100).contains(v)));

        let unique: HashSet<_> = values.iter().collect();
        assert_eq!(unique.len(), values.len());
    }

    #[test]
    fn distinct_values_can_exhaust_range() {
        let mut rng = default_rng();
        let mut values = distinct_values(&mut rng, 10, 0..=9);
        values.sort_unstable();
        assert_eq!(values, (0..10).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic]
    fn distinct_values_rejects_too_small_range() {
        let mut rng = default_rng();
        distinct_values(&mut rng, 11, 0..=9);
    }
}
