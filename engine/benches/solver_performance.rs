//! Criterion benchmarks for exact equity enumeration

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use equity_engine::{EquityRequest, SolveOptions};

fn benchmark_flop_enumeration(c: &mut Criterion) {
    let request = EquityRequest::parse(&["As Ks", "Td Tc", "8h 7h"], "Qs Js 9h").unwrap();

    c.bench_function("equity_flop_3way_sequential", |b| {
        b.iter(|| black_box(request.solve(&SolveOptions::sequential()).unwrap()))
    });
    c.bench_function("equity_flop_3way_parallel", |b| {
        b.iter(|| black_box(request.solve(&SolveOptions::default()).unwrap()))
    });
}

fn benchmark_preflop_enumeration(c: &mut Criterion) {
    let request = EquityRequest::parse(&["As Ah", "Kc Kd"], "").unwrap();
    let mut group = c.benchmark_group("equity_preflop_headsup");
    group.sample_size(10);
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(request.solve(&SolveOptions::default()).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, benchmark_flop_enumeration, benchmark_preflop_enumeration);
criterion_main!(benches);
