//! Benchmark harness for hand evaluator throughput
//!
//! Measures 5- and 7-card evaluation over a fixed deterministic sample.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use equity_engine::evaluator::{sample_hands, CactusKevEvaluator};
use equity_engine::tables::LookupTables;
use equity_engine::HandEvaluator;

fn benchmark_scalar_evaluation(c: &mut Criterion) {
    let evaluator = CactusKevEvaluator::new();
    let (boards, hands) = sample_hands(1_000_000, 12345);

    c.bench_function("hand_evaluator_7card_scalar", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for (board, hand) in black_box(&boards).iter().zip(black_box(&hands)) {
                sum += evaluator.evaluate(*board, *hand).value() as u64;
            }
            black_box(sum)
        })
    });

    c.bench_function("hand_evaluator_5card_scalar", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for board in black_box(&boards) {
                sum += evaluator.evaluate5(*board).value() as u64;
            }
            black_box(sum)
        })
    });
}

fn benchmark_batch_evaluation(c: &mut Criterion) {
    let evaluator = CactusKevEvaluator::new();
    let (boards, hands) = sample_hands(1_000_000, 12345);

    c.bench_function("hand_evaluator_7card_batch", |b| {
        b.iter(|| {
            let results = evaluator.evaluate_batch(black_box(&boards), black_box(&hands));
            black_box(results.len())
        })
    });
}

fn benchmark_table_build(c: &mut Criterion) {
    c.bench_function("lookup_table_build", |b| b.iter(|| black_box(LookupTables::build().len())));
}

criterion_group!(
    benches,
    benchmark_scalar_evaluation,
    benchmark_batch_evaluation,
    benchmark_table_build,
);
criterion_main!(benches);
