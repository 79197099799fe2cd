//! Criterion benchmarks for the Polarity classifier.
//!
//! Covers the two hot paths of a batch run:
//! - Text normalization through the full filter pipeline
//! - Naive Bayes scoring of normalized documents

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use polarity::analysis::Normalizer;
use polarity::classify::classifier::classify_tokens;
use polarity::config::NormalizationConfig;
use polarity::model::trainer::{ClassCorpus, train};
use polarity::vocabulary::Vocabulary;
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "great", "awful", "happy", "sad", "wonderful", "terrible", "news", "day", "feeling",
        "today", "love", "hate", "good", "bad", "amazing", "horrible", "stuff", "really", "very",
        "never",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 8 + (i % 12);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn bench_normalizer(c: &mut Criterion) {
    let normalizer = Normalizer::new(NormalizationConfig::default());
    let documents = generate_test_documents(100);

    let mut group = c.benchmark_group("normalizer");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("normalize_100_documents", |b| {
        b.iter(|| {
            for document in &documents {
                black_box(normalizer.normalize(document).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let normalizer = Normalizer::new(NormalizationConfig::default());
    let documents = generate_test_documents(200);

    let normalized: Vec<Vec<String>> = documents
        .iter()
        .map(|document| normalizer.normalize(document).unwrap())
        .collect();

    let half = documents.len() / 2;
    let positive = ClassCorpus::new(
        normalized[..half].iter().flatten().cloned().collect(),
        half,
    );
    let negative = ClassCorpus::new(
        normalized[half..].iter().flatten().cloned().collect(),
        documents.len() - half,
    );
    let vocabulary = Vocabulary::build(normalized.iter().flatten().map(String::as_str));
    let pair = train(&vocabulary, &positive, &negative).unwrap();

    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(normalized.len() as u64));
    group.bench_function("classify_200_documents", |b| {
        b.iter(|| {
            for tokens in &normalized {
                black_box(classify_tokens(tokens, &pair));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_normalizer, bench_classifier);
criterion_main!(benches);
