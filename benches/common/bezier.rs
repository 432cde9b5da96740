use criterion::{black_box, Criterion};
use nbezier_viz::binomial::{BinomialStrategy, BinomialTable, MAX_DEGREE};
use nbezier_viz::Evaluator;
use crate::common::samples::CURVES;

const STRATEGIES: [(&str, BinomialStrategy); 2] = [
    ("direct", BinomialStrategy::Direct),
    ("table", BinomialStrategy::Table),
];

pub fn eval(c: &mut Criterion) {
    for (name, strategy) in STRATEGIES {
        let evaluator = Evaluator::new(strategy, MAX_DEGREE);
        for (degree, points) in CURVES.iter() {
            c.bench_function(&format!("eval/{}/{}", name, degree), |b| {
                b.iter(|| black_box(evaluator.evaluate(points, black_box(0.5))))
            });
        }
    }
}

pub fn sample(c: &mut Criterion) {
    for (name, strategy) in STRATEGIES {
        let evaluator = Evaluator::new(strategy, MAX_DEGREE);
        c.bench_function(&format!("samples/{}", name), |b| {
            b.iter(|| black_box(evaluator.samples(&CURVES.FULL, 0.001).count()))
        });
    }
}

pub fn table(c: &mut Criterion) {
    c.bench_function("table", |b| {
        b.iter(|| black_box(BinomialTable::new(MAX_DEGREE)))
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    sample(c);
    table(c);
}
