use std::collections::HashMap;
use std::fs;
use std::path::Path;

use categorize::artifact::ModelArtifact;
use categorize::error::CategorizeError;
use categorize::ml::category_classifier::{
    ClassifierState, LinearModelState, NaiveBayesState, TfIdfState,
};
use categorize::predictor::Predictor;
use tempfile::tempdir;

fn vocabulary(terms: &[&str]) -> HashMap<String, usize> {
    terms
        .iter()
        .enumerate()
        .map(|(i, term)| (term.to_string(), i))
        .collect()
}

/// Binary sports/politics model.
fn news_artifact() -> ModelArtifact {
    let mut vectorizer = TfIdfState::new(
        vocabulary(&["election", "results", "vote", "match", "team", "goal"]),
        vec![1.8, 1.3, 1.9, 1.7, 1.5, 1.9],
    );
    vectorizer.stop_words = Some(vec!["the".into(), "were".into()]);

    ModelArtifact::new(
        vectorizer,
        ClassifierState::Linear(LinearModelState {
            classes: vec!["politics".into(), "sports".into()],
            coef: vec![vec![-2.3, -0.9, -2.0, 1.9, 2.1, 2.4]],
            intercept: vec![0.1],
        }),
    )
}

/// Three-class naive Bayes model over a shared vocabulary.
fn desk_artifact() -> ModelArtifact {
    ModelArtifact::new(
        TfIdfState::new(
            vocabulary(&["election", "vote", "goal", "team", "market", "shares"]),
            vec![1.6, 1.6, 1.6, 1.6, 1.6, 1.6],
        ),
        ClassifierState::MultinomialNb(NaiveBayesState {
            classes: vec!["business".into(), "politics".into(), "sports".into()],
            feature_log_prob: vec![
                vec![-3.0, -3.0, -3.2, -3.1, -0.9, -1.0],
                vec![-0.8, -0.9, -3.4, -3.0, -2.9, -3.1],
                vec![-3.3, -3.2, -0.7, -0.9, -3.2, -3.3],
            ],
            class_log_prior: vec![-1.2, -1.0, -1.1],
        }),
    )
}

fn save(artifact: &ModelArtifact, dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    artifact.save(&path).unwrap();
    path
}

#[test]
fn test_election_text_is_politics() {
    let dir = tempdir().unwrap();
    let path = save(&news_artifact(), dir.path(), "category_model.json");

    let predictor = Predictor::load_artifact_from(&path).unwrap();
    assert_eq!(
        predictor.predict("the election results were announced").unwrap(),
        "politics"
    );
    assert_eq!(
        predictor.predict("A late GOAL won the match for the team").unwrap(),
        "sports"
    );
}

#[test]
fn test_prediction_is_deterministic() {
    let dir = tempdir().unwrap();
    let path = save(&news_artifact(), dir.path(), "category_model.json");

    let first = Predictor::load_artifact_from(&path).unwrap();
    let second = Predictor::load_artifact_from(&path).unwrap();
    let text = "vote counting continued after the match";

    let expected = first.predict(text).unwrap().to_string();
    for _ in 0..5 {
        assert_eq!(first.predict(text).unwrap(), expected);
        assert_eq!(second.predict(text).unwrap(), expected);
    }
    assert_eq!(
        first.extract_features(text).unwrap(),
        second.extract_features(text).unwrap()
    );
}

#[test]
fn test_label_is_always_known() {
    let dir = tempdir().unwrap();
    let path = save(&desk_artifact(), dir.path(), "desk.json");
    let predictor = Predictor::load_artifact_from(&path).unwrap();

    let inputs = [
        "",
        "   ",
        "!!!",
        "quarterly market shares rallied",
        "the team scored a goal",
        "a snap election vote",
        "zzz qqq unrelated words",
        "élection ünd göal",
    ];
    for text in inputs {
        let label = predictor.predict(text).unwrap();
        assert!(
            predictor.labels().iter().any(|l| l == label),
            "{label} not in label set for {text:?}"
        );
    }

    assert_eq!(
        predictor.predict("quarterly market shares rallied").unwrap(),
        "business"
    );
    assert_eq!(predictor.predict("the team scored a goal").unwrap(), "sports");
    // No known terms: the largest prior wins.
    assert_eq!(predictor.predict("zzz qqq").unwrap(), "politics");
}

#[test]
fn test_combining_marks_reach_vocabulary() {
    // Terms as scikit-learn extracts them: the default pattern stops at
    // virama, vowel signs and combining accents.
    let namas = "\u{928}\u{92e}\u{938}";
    let artifact = ModelArtifact::new(
        TfIdfState::new(vocabulary(&[namas, "cafe", "vote"]), vec![1.5, 1.5, 1.2]),
        ClassifierState::Linear(LinearModelState {
            classes: vec!["greeting".into(), "politics".into()],
            coef: vec![vec![-2.0, -1.0, 2.0]],
            intercept: vec![0.5],
        }),
    );
    let dir = tempdir().unwrap();
    let path = save(&artifact, dir.path(), "category_model.json");
    let predictor = Predictor::load_artifact_from(&path).unwrap();

    let text = "\u{928}\u{92e}\u{938}\u{94d}\u{924}\u{947} cafe\u{301}";
    assert_eq!(predictor.extract_features(text).unwrap().nnz(), 2);
    assert_eq!(predictor.predict(text).unwrap(), "greeting");
}

#[test]
fn test_bincode_artifact() {
    let dir = tempdir().unwrap();
    let json = save(&news_artifact(), dir.path(), "model.json");
    let bin = save(&news_artifact(), dir.path(), "model.bin");

    let from_json = Predictor::load_artifact_from(&json).unwrap();
    let from_bin = Predictor::load_artifact_from(&bin).unwrap();
    let text = "the election results were announced";

    assert_eq!(from_json.predict(text).unwrap(), from_bin.predict(text).unwrap());
}

#[test]
fn test_missing_artifact() {
    let dir = tempdir().unwrap();
    let err = Predictor::load_artifact_from(dir.path().join("category_model.json")).unwrap_err();

    assert!(matches!(err, CategorizeError::ArtifactMissing { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_directory_in_place_of_artifact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("category_model.json");
    fs::create_dir(&path).unwrap();

    let err = Predictor::load_artifact_from(&path).unwrap_err();
    assert!(matches!(err, CategorizeError::ArtifactCorrupt(_)));
}

#[test]
fn test_corrupt_artifacts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("category_model.json");

    let cases: Vec<String> = vec![
        "not json at all".into(),
        "{}".into(),
        r#"{"vectorizer": {"vocabulary": {"a": 0}}, "model": {"forest": {}}}"#.into(),
        // Vocabulary with a hole at index 1.
        r#"{"vectorizer": {"vocabulary": {"aa": 0, "bb": 2}, "idf": [1.0, 1.0]},
            "model": {"linear": {"classes": ["x", "y"], "coef": [[1.0, 1.0]], "intercept": [0.0]}}}"#
            .into(),
        // Classifier width differs from the vocabulary size.
        r#"{"vectorizer": {"vocabulary": {"aa": 0, "bb": 1}, "idf": [1.0, 1.0]},
            "model": {"linear": {"classes": ["x", "y"], "coef": [[1.0, 1.0, 1.0]], "intercept": [0.0]}}}"#
            .into(),
        // Label that would print on two lines.
        r#"{"vectorizer": {"vocabulary": {"aa": 0}, "idf": [1.0]},
            "model": {"linear": {"classes": ["x", "y\nz"], "coef": [[1.0]], "intercept": [0.0]}}}"#
            .into(),
        // Token pattern with two capture groups.
        r#"{"vectorizer": {"vocabulary": {"aa": 0}, "idf": [1.0], "token_pattern": "(a)(b)"},
            "model": {"linear": {"classes": ["x", "y"], "coef": [[1.0]], "intercept": [0.0]}}}"#
            .into(),
    ];

    for contents in cases {
        fs::write(&path, &contents).unwrap();
        let err = Predictor::load_artifact_from(&path).unwrap_err();
        assert!(
            matches!(err, CategorizeError::ArtifactCorrupt(_)),
            "expected ArtifactCorrupt for {contents}, got {err:?}"
        );
        assert_eq!(err.exit_code(), 4);
    }
}
