//! Benchmarks for call pricing and statistics
//!
//! Run with: cargo bench --package callbill-services
//!
//! These benchmarks measure batch validation + pricing and daily
//! aggregation over in-memory records (no store involved).

use callbill_core::models::{CallRecord, NewCall};
use callbill_services::{CallPricer, StatisticsAggregator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Create a batch of raw calls spread over a month
fn create_mock_batch(size: usize) -> Vec<NewCall> {
    let base = 1_598_918_400; // 2020-09-01 00:00:00 UTC
    (0..size as i64)
        .map(|i| {
            let start = base + (i * 7_919) % (30 * 86_400);
            let call_type = if i % 3 == 0 { "Inbound" } else { "Outbound" };
            NewCall::new(100 + i % 50, 200 + i % 70, start, start + (i * 37) % 3_600, call_type)
        })
        .collect()
}

/// Benchmark batch validation and pricing
fn bench_price_batch(c: &mut Criterion) {
    let pricer = CallPricer::default();
    let mut group = c.benchmark_group("price_batch");

    for size in [100, 1_000, 10_000].iter() {
        let batch = create_mock_batch(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| pricer.price_batch(black_box(&batch)));
        });
    }

    group.finish();
}

/// Benchmark daily statistics aggregation
fn bench_aggregate(c: &mut Criterion) {
    let pricer = CallPricer::default();
    let mut group = c.benchmark_group("aggregate_daily");

    for size in [100, 1_000, 10_000].iter() {
        let records: Vec<CallRecord> = pricer
            .price_batch(&create_mock_batch(*size))
            .unwrap_or_default();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| StatisticsAggregator::aggregate(black_box(&records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_price_batch, bench_aggregate);
criterion_main!(benches);
