//! Latency benchmarks for the analysis pipeline
//!
//! The whole pipeline is lexicon work and should stay well under a
//! millisecond for typical inputs.
//!
//! Run with: cargo bench -p sentiscope-analyzer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sentiscope_analyzer::{preprocess, SentimentAnalyzer};

fn benchmark_analyze(c: &mut Criterion) {
    let analyzer = SentimentAnalyzer::with_default_engine().expect("failed to create analyzer");

    let test_cases = vec![
        ("short_positive", "I love this amazing product!"),
        ("short_negative", "This was a terrible, awful experience."),
        ("short_neutral", "The package arrived on Tuesday."),
        (
            "medium_mixed",
            "The screen is beautiful and the battery life is excellent, \
             but the keyboard feels cheap and support was disappointing.",
        ),
    ];

    let mut group = c.benchmark_group("analyze");
    group.sample_size(100);

    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("analyze", name), &text, |b, text| {
            b.iter(|| analyzer.analyze(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_preprocess(c: &mut Criterion) {
    let spammy = "soooooo goooooood!!!!!!! &amp; more   spaces   ".repeat(20);

    let mut group = c.benchmark_group("preprocess");
    group.sample_size(200);

    group.bench_function("spammy_input", |b| {
        b.iter(|| preprocess(black_box(&spammy)));
    });

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let analyzer = SentimentAnalyzer::with_default_engine().expect("failed to create analyzer");
    let texts: Vec<String> = (0..50)
        .map(|i| format!("Review {i}: the product was good but shipping was slow."))
        .collect();

    let mut group = c.benchmark_group("batch_analyze");
    group.sample_size(50);

    group.bench_function("fifty_items", |b| {
        b.iter(|| analyzer.batch_analyze(black_box(&texts)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_analyze,
    benchmark_preprocess,
    benchmark_batch
);
criterion_main!(benches);
