use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use salita::evaluation::{evaluate, EvaluationConfig, EvaluationTable};
use salita::{Naturalizer, SourceHint};

/// Benchmark pipeline compilation to measure regex build overhead
fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("engine_construction", |b| {
        b.iter(|| {
            let engine = Naturalizer::with_default_rules().unwrap();
            black_box(engine);
        })
    });
}

/// Benchmark single-word naturalization for short and long inputs
fn bench_naturalize_words(c: &mut Criterion) {
    let engine = Naturalizer::with_default_rules().unwrap();
    let mut group = c.benchmark_group("naturalize");

    for word in ["centro", "Ciprofloxacin", "Hydrochlorothiazide", "Pyrantel Pamoate"] {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, word| {
            b.iter(|| black_box(engine.naturalize(black_box(word), SourceHint::English)))
        });
    }

    group.finish();
}

/// Benchmark a full evaluation pass over the bundled reference table
fn bench_reference_evaluation(c: &mut Criterion) {
    let engine = Naturalizer::with_default_rules().unwrap();
    let table = EvaluationTable::reference().unwrap();
    let config = EvaluationConfig::default();

    c.bench_function("reference_evaluation", |b| {
        b.iter(|| black_box(evaluate(&engine, &table, &config)))
    });
}

criterion_group!(
    benches,
    bench_engine_construction,
    bench_naturalize_words,
    bench_reference_evaluation
);
criterion_main!(benches);
