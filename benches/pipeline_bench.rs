//! Criterion benchmarks for the evaluation pipeline.
//!
//! Defuzzification dominates: every score samples each output category over
//! the whole grid.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_credit::variables::Credit;
use fuzzy_credit::{CreditEvaluator, Defuzzifier, InferenceConfig, Inputs, Memberships};

fn applicants(n: usize) -> Vec<Inputs> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;

            Inputs::new(t * 1_000_000., 10. * (1. - t), t * 800_000., 20_000. + t * 70_000., 1. + t * 8.)
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let inputs = Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5);

    for resolution in [100, 1000, 10_000] {
        let evaluator = CreditEvaluator::new(&InferenceConfig::default().with_resolution(resolution)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(resolution), &evaluator, |b, evaluator| {
            b.iter(|| evaluator.evaluate(black_box(&inputs)).unwrap())
        });
    }

    group.finish();
}

fn bench_centroid(c: &mut Criterion) {
    let defuzz = Defuzzifier::default();
    let credit = Memberships::<Credit>::from_named([
        ("Very_low", 0.),
        ("Low", 0.3),
        ("Medium", 0.8),
        ("High", 0.5),
        ("Very_high", 0.1),
    ])
    .unwrap();

    c.bench_function("centroid_credit", |b| b.iter(|| defuzz.centroid(black_box(&credit))));
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_batch");
    let evaluator = CreditEvaluator::default();

    for n in [16, 256] {
        let batch = applicants(n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| evaluator.evaluate_batch(black_box(batch)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_centroid, bench_batch);
criterion_main!(benches);
