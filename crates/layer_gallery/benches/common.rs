#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Criterion settings shared by the catalog benches.
pub fn gallery_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

/// Throughput in records; an empty input still counts as one element.
pub fn records_throughput(records: usize) -> Throughput {
    Throughput::Elements(records.max(1) as u64)
}

/// Random source for randomized accessors, seeded per bench label.
pub fn bench_rng(label: &str) -> StdRng {
    let seed = label
        .bytes()
        .fold(0xACCE55_u64, |acc, b| acc.rotate_left(5) ^ u64::from(b));
    StdRng::seed_from_u64(seed)
}
