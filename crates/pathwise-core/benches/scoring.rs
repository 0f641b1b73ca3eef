use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pathwise_core::bank::QuestionBank;
use pathwise_core::model::{AnswerSet, Aptitude, Interest, Likert};
use pathwise_core::recommend::RecommendationEngine;
use pathwise_core::scoring::ScoreAggregator;

fn bench_compute_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_scores");
    let aggregator = ScoreAggregator::new(Arc::new(QuestionBank::standard()));

    let empty = AnswerSet::new();
    let mut neutral = AnswerSet::new();
    neutral.fill(1..=90, Likert::NEUTRAL);
    let mixed = AnswerSet::from_raw((1..=90).map(|id| (id, i64::from(id % 5) + 1)))
        .expect("responses are in range");
    let partial = AnswerSet::from_raw((1..=30).map(|id| (id, 4))).expect("responses are in range");

    group.bench_function("empty", |b| {
        b.iter(|| aggregator.compute_scores(black_box(&empty)))
    });

    group.bench_function("neutral", |b| {
        b.iter(|| aggregator.compute_scores(black_box(&neutral)))
    });

    group.bench_function("mixed", |b| {
        b.iter(|| aggregator.compute_scores(black_box(&mixed)))
    });

    group.bench_function("partial", |b| {
        b.iter(|| aggregator.compute_scores(black_box(&partial)))
    });

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = RecommendationEngine::standard();

    group.bench_function("two_interests", |b| {
        b.iter(|| {
            engine.recommend(
                black_box(&[Interest::Investigative, Interest::Realistic]),
                black_box(&[]),
            )
        })
    });

    group.bench_function("with_aptitudes", |b| {
        b.iter(|| {
            engine.recommend(
                black_box(&[Interest::Social, Interest::Realistic]),
                black_box(&[Aptitude::Numerical, Aptitude::Logical, Aptitude::Spatial]),
            )
        })
    });

    group.bench_function("no_match", |b| {
        b.iter(|| engine.recommend(black_box(&[]), black_box(&[Aptitude::Memory])))
    });

    group.finish();
}

criterion_group!(benches, bench_compute_scores, bench_recommend);
criterion_main!(benches);
