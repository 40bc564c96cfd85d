//! Inactive-category hot path benchmark
//!
//! The core promise of the crate is that instrumentation left in the code is
//! near-free until its category is enabled. This benchmark measures the cost
//! of a gated-off log call and a gated-off start/stop pair, alongside the
//! enabled path writing to a null sink for comparison.
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench gate_overhead
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lapstack::Logger;

fn bench_inactive_log(c: &mut Criterion) {
    let mut logger = Logger::with_sink(Box::new(std::io::sink()));

    // Register the category once so the steady state is a pure gate lookup.
    logger.log("disabled", "warmup");

    c.bench_function("inactive_log", |b| {
        b.iter(|| {
            logger.log(black_box("disabled"), black_box("dropped message"));
        });
    });
}

fn bench_inactive_timer_pair(c: &mut Criterion) {
    let mut logger = Logger::with_sink(Box::new(std::io::sink()));
    logger.start_timer("disabled", "bench", "warmup", false);

    c.bench_function("inactive_start_stop", |b| {
        b.iter(|| {
            logger.start_timer(black_box("disabled"), "bench", "Starting Timer", false);
            logger.stop_timer(black_box("disabled"), "bench", "Stop Timer");
        });
    });
}

fn bench_active_timer_pair(c: &mut Criterion) {
    let mut logger = Logger::with_sink(Box::new(std::io::sink()));
    logger.set_print_timestamp(false);
    logger.enable_category("enabled");

    c.bench_function("active_start_stop_null_sink", |b| {
        b.iter(|| {
            logger.start_timer(black_box("enabled"), "bench", "Starting Timer", false);
            logger.stop_timer(black_box("enabled"), "bench", "Stop Timer");
        });
    });
}

criterion_group!(
    benches,
    bench_inactive_log,
    bench_inactive_timer_pair,
    bench_active_timer_pair
);
criterion_main!(benches);
