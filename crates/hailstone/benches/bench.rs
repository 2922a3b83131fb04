use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hailstone::{Clock, SnowflakeGenerator};
use std::time::Instant;

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

struct FixedMockTime {
    millis: u64,
}

impl Clock for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

/// Benchmarks the hot path where the sequence never exhausts: a fresh
/// generator with a frozen clock can issue exactly `TOTAL_IDS` IDs without
/// ever spinning.
fn bench_hot_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/hot");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator =
                    SnowflakeGenerator::with_clock(0, FixedMockTime { millis: 42 }).unwrap();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id().unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks generation against the real system clock, including the
/// occasional spin when a millisecond is exhausted.
fn bench_system_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/system_clock");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        let generator = SnowflakeGenerator::new(0).unwrap();
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.next_id().unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hot_path, bench_system_clock);
criterion_main!(benches);
