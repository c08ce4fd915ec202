//! Criterion benchmarks for feature extraction and prediction.

use std::collections::HashMap;
use std::hint::black_box;

use categorize::artifact::ModelArtifact;
use categorize::ml::category_classifier::{
    ClassifierState, LinearModelState, NaiveBayesState, TfIdfState,
};
use categorize::predictor::Predictor;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

const VOCABULARY_SIZE: usize = 5_000;

/// Synthetic vocabulary of `term0 .. termN`.
fn vectorizer() -> TfIdfState {
    let vocabulary: HashMap<String, usize> = (0..VOCABULARY_SIZE)
        .map(|i| (format!("term{i}"), i))
        .collect();
    let idf = (0..VOCABULARY_SIZE)
        .map(|i| 1.0 + (i % 17) as f64 / 10.0)
        .collect();
    let mut state = TfIdfState::new(vocabulary, idf);
    state.ngram_range = (1, 2);
    state
}

fn linear_predictor(n_classes: usize) -> Predictor {
    let coef = (0..n_classes)
        .map(|c| {
            (0..VOCABULARY_SIZE)
                .map(|i| (((i * 31 + c * 7) % 13) as f64 - 6.0) / 6.0)
                .collect()
        })
        .collect();
    let artifact = ModelArtifact::new(
        vectorizer(),
        ClassifierState::Linear(LinearModelState {
            classes: (0..n_classes).map(|c| format!("class{c}")).collect(),
            coef,
            intercept: vec![0.0; n_classes],
        }),
    );
    Predictor::from_artifact(artifact).unwrap()
}

fn naive_bayes_predictor(n_classes: usize) -> Predictor {
    let feature_log_prob = (0..n_classes)
        .map(|c| {
            (0..VOCABULARY_SIZE)
                .map(|i| -1.0 - ((i + c) % 11) as f64 / 2.0)
                .collect()
        })
        .collect();
    let artifact = ModelArtifact::new(
        vectorizer(),
        ClassifierState::MultinomialNb(NaiveBayesState {
            classes: (0..n_classes).map(|c| format!("class{c}")).collect(),
            feature_log_prob,
            class_log_prior: vec![-(n_classes as f64).ln(); n_classes],
        }),
    );
    Predictor::from_artifact(artifact).unwrap()
}

/// Generate a document mixing known and unknown terms.
fn generate_text(words: usize) -> String {
    (0..words)
        .map(|i| {
            if i % 3 == 0 {
                format!("unknown{i}")
            } else {
                format!("Term{}", (i * 97) % VOCABULARY_SIZE)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_feature_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extraction");
    let predictor = linear_predictor(2);

    for words in [10, 200] {
        let text = generate_text(words);
        group.throughput(Throughput::Elements(words as u64));
        group.bench_function(format!("tfidf_{words}_words"), |b| {
            b.iter(|| predictor.extract_features(black_box(&text)).unwrap())
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    let text = generate_text(200);

    let binary = linear_predictor(2);
    group.bench_function("linear_binary", |b| {
        b.iter(|| binary.predict(black_box(&text)).unwrap().len())
    });

    let multiclass = linear_predictor(20);
    group.bench_function("linear_20_classes", |b| {
        b.iter(|| multiclass.predict(black_box(&text)).unwrap().len())
    });

    let naive_bayes = naive_bayes_predictor(20);
    group.bench_function("multinomial_nb_20_classes", |b| {
        b.iter(|| naive_bayes.predict(black_box(&text)).unwrap().len())
    });

    group.finish();
}

criterion_group!(benches, bench_feature_extraction, bench_predict);
criterion_main!(benches);
